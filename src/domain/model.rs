use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Bem vindo ao Tutorial de Mocks!";
pub const FETCH_FAILURE_PREFIX: &str = "Could not get CSV file: ";
pub const DEFAULT_OUTPUT_PATH: &str = "dados_incendios_cf.csv";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Settings for the service adapter. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: Option<String>,
}

impl ServiceConfig {
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchReport {
    pub path: String,
    pub bytes_written: usize,
    /// Data rows after the header, when the body parses as CSV.
    pub rows: Option<usize>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Written(FetchReport),
    /// The resource could not be retrieved; nothing was written.
    Unavailable { detail: String },
}

impl FetchOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, FetchOutcome::Written(_))
    }

    pub fn report(&self) -> Option<&FetchReport> {
        match self {
            FetchOutcome::Written(report) => Some(report),
            FetchOutcome::Unavailable { .. } => None,
        }
    }

    /// Welcome message on success, `Could not get CSV file: <detail>` otherwise.
    pub fn message(&self) -> String {
        match self {
            FetchOutcome::Written(_) => WELCOME_MESSAGE.to_string(),
            FetchOutcome::Unavailable { detail } => format!("{}{}", FETCH_FAILURE_PREFIX, detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_outcome_renders_welcome_message() {
        let outcome = FetchOutcome::Written(FetchReport {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            bytes_written: 4,
            rows: Some(0),
            fetched_at: Utc::now(),
        });
        assert!(outcome.is_written());
        assert_eq!(outcome.message(), WELCOME_MESSAGE);
        assert_eq!(outcome.report().map(|r| r.bytes_written), Some(4));
    }

    #[test]
    fn test_unavailable_outcome_renders_diagnostic() {
        let outcome = FetchOutcome::Unavailable {
            detail: "dns error: failed to lookup address information".to_string(),
        };
        assert!(!outcome.is_written());
        assert!(outcome.report().is_none());
        assert_eq!(
            outcome.message(),
            "Could not get CSV file: dns error: failed to lookup address information"
        );
    }

    #[test]
    fn test_service_config_defaults_to_no_host() {
        assert_eq!(ServiceConfig::default().host, None);
        assert_eq!(
            ServiceConfig::with_host("http://x:8000").host.as_deref(),
            Some("http://x:8000")
        );
    }
}
