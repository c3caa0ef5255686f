use crate::core::extractor::extract;
use crate::core::reference::ReferenceTables;
use crate::core::resolver::{Resolution, Resolver};
use crate::domain::model::{TrackingIdentifier, TrackingResult};
use crate::domain::ports::DocumentFetcher;
use crate::utils::error::Result;
use std::sync::Arc;

pub const DEFAULT_TRACKING_ENDPOINT: &str =
    "http://websro.correios.com.br/sro_bin/txect01$.QueryList?P_LINGUA=001&P_TIPO=001&P_COD_UNI=";

/// Resolve, fetch and extract, producing one `TrackingResult` per call.
pub struct Tracker<F: DocumentFetcher> {
    fetcher: F,
    tables: Arc<ReferenceTables>,
    endpoint: String,
}

impl<F: DocumentFetcher> Tracker<F> {
    pub fn new(fetcher: F, tables: Arc<ReferenceTables>, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            tables,
            endpoint: endpoint.into(),
        }
    }

    pub fn with_default_endpoint(fetcher: F, tables: Arc<ReferenceTables>) -> Self {
        Self::new(fetcher, tables, DEFAULT_TRACKING_ENDPOINT)
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// The tracking page URL is the endpoint with the code appended.
    pub fn tracking_url(&self, identifier: &TrackingIdentifier) -> String {
        format!("{}{}", self.endpoint, identifier.code())
    }

    /// Validates `code` and fetches its history. Invalid codes fail before
    /// any request is made.
    pub async fn track(&self, code: &str) -> Result<TrackingResult> {
        let resolution = Resolver::new(&self.tables).resolve_full(code)?;
        tracing::debug!(
            "Resolved {} (service {}, origin {})",
            resolution.identifier,
            resolution.service.code,
            resolution.origin.code
        );
        self.fetch_history(resolution).await
    }

    /// Fetches the history of an already tracked code again. The previous
    /// result is left untouched.
    pub async fn refresh(&self, previous: &TrackingResult) -> Result<TrackingResult> {
        self.track(previous.identifier().code()).await
    }

    async fn fetch_history(&self, resolution: Resolution) -> Result<TrackingResult> {
        let url = self.tracking_url(&resolution.identifier);
        let document = self.fetcher.fetch(&url).await?;

        let events = extract(&document);
        if events.is_empty() {
            tracing::warn!(
                "No events found for {}; the object may not be registered yet or the page layout changed",
                resolution.identifier
            );
        } else {
            tracing::info!("Found {} events for {}", events.len(), resolution.identifier);
        }

        Ok(TrackingResult::new(
            resolution.identifier,
            resolution.service,
            resolution.origin,
            events,
        ))
    }
}
