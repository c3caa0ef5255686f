pub mod extractor;
pub mod reference;
mod reference_data;
pub mod resolver;
pub mod tracker;

pub use crate::domain::model::{OriginInfo, ServiceInfo, TrackingEvent, TrackingIdentifier, TrackingResult};
pub use crate::domain::ports::DocumentFetcher;
pub use crate::utils::error::Result;
