#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{ServiceConfig, DEFAULT_OUTPUT_PATH};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use std::path::Path;
use std::time::Duration;
use toml_config::TomlConfig;

/// Fully resolved settings handed to the fetcher and the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source_url: String,
    pub output_path: String,
    pub service: ServiceConfig,
    pub timeout_seconds: Option<u64>,
}

impl AppConfig {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            service: ServiceConfig::default(),
            timeout_seconds: None,
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_service(mut self, service: ServiceConfig) -> Self {
        self.service = service;
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(TomlConfig::from_file(path)?.into())
    }
}

impl From<TomlConfig> for AppConfig {
    fn from(file: TomlConfig) -> Self {
        Self {
            source_url: file.source.url,
            output_path: file
                .output
                .path
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            service: ServiceConfig {
                host: file.service.host,
            },
            timeout_seconds: file.source.timeout_seconds,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn service_config(&self) -> &ServiceConfig {
        &self.service
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.url", &self.source_url)?;
        validate_path("output.path", &self.output_path)?;

        if let Some(host) = &self.service.host {
            validate_url("service.host", host)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
