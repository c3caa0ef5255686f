use crate::core::reference::ReferenceTables;
use crate::domain::model::{OriginInfo, ServiceInfo, TrackingIdentifier};
use crate::utils::error::ResolveError;
use regex::Regex;
use std::sync::LazyLock;

/// Two letters of service, nine digits, two letters of origin. Unanchored.
static TRACKING_CODE_REG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]{2})[0-9]{9}([A-Z]{2})").unwrap());

/// A resolved code together with the table entries it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub identifier: TrackingIdentifier,
    pub service: ServiceInfo,
    pub origin: OriginInfo,
}

/// Validates tracking codes against the shape and the reference tables.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn resolve(&self, code: &str) -> Result<TrackingIdentifier, ResolveError> {
        self.resolve_full(code).map(|resolution| resolution.identifier)
    }

    /// The first code-shaped substring of `code` wins; the service is
    /// checked before the origin.
    pub fn resolve_full(&self, code: &str) -> Result<Resolution, ResolveError> {
        let caps = TRACKING_CODE_REG
            .captures(code)
            .ok_or_else(|| ResolveError::InvalidFormat {
                input: code.to_string(),
            })?;

        // all three groups always participate in a match
        let (whole, service_code, origin_code) = match (caps.get(0), caps.get(1), caps.get(2)) {
            (Some(w), Some(s), Some(o)) => (w.as_str(), s.as_str(), o.as_str()),
            _ => {
                return Err(ResolveError::InvalidFormat {
                    input: code.to_string(),
                })
            }
        };

        let service =
            self.tables
                .service(service_code)
                .ok_or_else(|| ResolveError::UnknownService {
                    code: service_code.to_string(),
                })?;
        let origin =
            self.tables
                .origin(origin_code)
                .ok_or_else(|| ResolveError::UnknownOrigin {
                    code: origin_code.to_string(),
                })?;

        Ok(Resolution {
            identifier: TrackingIdentifier::new(
                whole.to_string(),
                service_code.to_string(),
                origin_code.to_string(),
            ),
            service,
            origin,
        })
    }
}

/// Resolve against the given tables.
pub fn resolve(code: &str, tables: &ReferenceTables) -> Result<TrackingIdentifier, ResolveError> {
    Resolver::new(tables).resolve(code)
}
