use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::Http(_) => ErrorCategory::Network,
            FetchError::Io(_) => ErrorCategory::Storage,
            FetchError::Decode(_) | FetchError::Serialization(_) => ErrorCategory::Data,
            FetchError::ConfigParse { .. }
            | FetchError::MissingConfig { .. }
            | FetchError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FetchError::Http(_) => {
                "Check the network connection and that the service host is reachable".to_string()
            }
            FetchError::Io(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            FetchError::Decode(_) => {
                "The remote resource is not UTF-8 text; verify the source URL".to_string()
            }
            FetchError::Serialization(_) => "Check the request payload".to_string(),
            FetchError::ConfigParse { .. } => "Fix the syntax of the TOML file".to_string(),
            FetchError::MissingConfig { field } => {
                format!("Provide '{}' on the command line or in the config file", field)
            }
            FetchError::InvalidConfigValue { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Storage => format!("Could not write the output file: {}", self),
            ErrorCategory::Data => format!("Unexpected data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

/// Formats an error together with its `source()` chain, outermost first.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

pub type Result<T> = std::result::Result<T, FetchError>;
