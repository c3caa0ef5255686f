use thiserror::Error;

/// Failures while turning user input into a `TrackingIdentifier`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid tracking code: {input:?} does not contain a code like AA123456789BR")]
    InvalidFormat { input: String },

    #[error("Invalid tracking code: service \"{code}\" does not exist")]
    UnknownService { code: String },

    #[error("Invalid tracking code: origin \"{code}\" does not exist")]
    UnknownOrigin { code: String },
}

#[derive(Error, Debug)]
pub enum CorreiosError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Fetch failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Fetch failed: {url} answered with HTTP {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Output error: {message}")]
    OutputError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Fetch,
    Config,
    Output,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CorreiosError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CorreiosError::Resolve(_) => ErrorCategory::Validation,
            CorreiosError::FetchError(_) | CorreiosError::HttpStatusError { .. } => {
                ErrorCategory::Fetch
            }
            CorreiosError::IoError(_) => ErrorCategory::Io,
            CorreiosError::SerializationError(_)
            | CorreiosError::CsvError(_)
            | CorreiosError::OutputError { .. } => ErrorCategory::Output,
            CorreiosError::ConfigValidationError { .. }
            | CorreiosError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            // the provider may come back; running again is reasonable
            ErrorCategory::Fetch => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Config | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CorreiosError::Resolve(ResolveError::InvalidFormat { input }) => {
                format!("'{}' is not a valid tracking code", input)
            }
            CorreiosError::Resolve(ResolveError::UnknownService { code }) => {
                format!("Service '{}' is not a known Correios service", code)
            }
            CorreiosError::Resolve(ResolveError::UnknownOrigin { code }) => {
                format!("Origin '{}' is not a known country code", code)
            }
            CorreiosError::FetchError(e) if e.is_timeout() => {
                "The tracking service did not answer in time".to_string()
            }
            CorreiosError::FetchError(_) => "Could not reach the tracking service".to_string(),
            CorreiosError::HttpStatusError { status, .. } => {
                format!("The tracking service answered with HTTP {}", status)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => {
                "Tracking codes look like SS123456789BR: two letters, nine digits, two letters"
            }
            ErrorCategory::Fetch => "Check your network connection and the endpoint, then try again",
            ErrorCategory::Config => "Check the configuration file and command line options",
            ErrorCategory::Output => "Try a different output format",
            ErrorCategory::Io => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CorreiosError>;
