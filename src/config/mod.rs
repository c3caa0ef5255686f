#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::output::OutputFormat;
use crate::core::reference::ReferenceTables;
use crate::core::tracker::DEFAULT_TRACKING_ENDPOINT;
use crate::utils::error::{CorreiosError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("correios/", env!("CARGO_PKG_VERSION"));

static ENV_VAR_REG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Values the fetcher and tracker need, whatever the source.
pub trait ConfigProvider: Send + Sync {
    fn tracking_endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorreiosConfig {
    pub tracking: TrackingConfig,
    pub http: HttpConfig,
    pub reference: ReferenceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub endpoint: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TRACKING_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// TOML file with `[servicos]` and/or `[paises]` tables
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl CorreiosConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CorreiosError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CorreiosError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REG
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Built-in tables unless `reference.file` points somewhere else.
    pub fn reference_tables(&self) -> Result<ReferenceTables> {
        match &self.reference.file {
            Some(path) => {
                tracing::info!("Loading reference tables from: {}", path);
                ReferenceTables::from_file(path)
            }
            None => Ok(ReferenceTables::builtin()),
        }
    }
}

impl ConfigProvider for CorreiosConfig {
    fn tracking_endpoint(&self) -> &str {
        &self.tracking.endpoint
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }
}

impl Validate for CorreiosConfig {
    fn validate(&self) -> Result<()> {
        validate_url("tracking.endpoint", &self.tracking.endpoint)?;
        validate_positive_number("http.timeout_seconds", self.http.timeout_seconds, 1)?;
        validate_non_empty_string("http.user_agent", &self.http.user_agent)?;
        if let Some(file) = &self.reference.file {
            validate_path("reference.file", file)?;
        }
        Ok(())
    }
}
