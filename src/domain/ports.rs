use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves the raw tracking page for a URL.
///
/// Implementations own transport concerns (timeouts, headers, TLS); callers
/// get either the body text or the failure, unchanged.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}
