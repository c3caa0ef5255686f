use crate::config::ConfigProvider;
use crate::domain::ports::DocumentFetcher;
use crate::utils::error::{CorreiosError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// `DocumentFetcher` backed by a reqwest client. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .default_headers(Self::default_headers(user_agent)?)
                .timeout(timeout)
                .build()?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.timeout(), config.user_agent())
    }

    fn default_headers(user_agent: &str) -> Result<HeaderMap> {
        let value =
            HeaderValue::from_str(user_agent).map_err(|e| CorreiosError::InvalidConfigValueError {
                field: "http.user_agent".to_string(),
                value: user_agent.to_string(),
                reason: e.to_string(),
            })?;
        let mut map = HeaderMap::new();
        map.insert(USER_AGENT, value);
        Ok(map)
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(CorreiosError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
