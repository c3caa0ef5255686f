pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::http::HttpFetcher;
pub use crate::adapters::output::{render, OutputFormat};
pub use crate::config::{ConfigProvider, CorreiosConfig};
pub use crate::core::extractor::extract;
pub use crate::core::reference::ReferenceTables;
pub use crate::core::resolver::{resolve, Resolver};
pub use crate::core::tracker::Tracker;
pub use crate::domain::model::{OriginInfo, ServiceInfo, TrackingEvent, TrackingIdentifier, TrackingResult};
pub use crate::domain::ports::DocumentFetcher;
pub use crate::utils::error::{CorreiosError, ResolveError, Result};
