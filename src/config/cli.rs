use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::domain::model::{ServiceConfig, DEFAULT_OUTPUT_PATH};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "incendios-fetch")]
#[command(about = "Download the fire-incidence CSV and store it locally")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with [source], [output] and [service] sections")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "URL of the CSV resource")]
    pub source_url: Option<String>,

    #[arg(long, help = "Destination file [default: dados_incendios_cf.csv]")]
    pub output_path: Option<String>,

    #[arg(long, help = "Base URL of the entity service")]
    pub host: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges the optional config file with the command line; flags win.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = self
            .config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()?
            .map(AppConfig::from);

        let source_url = self
            .source_url
            .clone()
            .or_else(|| file.as_ref().map(|f| f.source_url.clone()));
        let source_url = validate_required_field("source.url", &source_url)?.clone();

        let output_path = self
            .output_path
            .clone()
            .or_else(|| file.as_ref().map(|f| f.output_path.clone()))
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        let host = self
            .host
            .clone()
            .or_else(|| file.as_ref().and_then(|f| f.service.host.clone()));

        let timeout_seconds = self
            .timeout_seconds
            .or_else(|| file.as_ref().and_then(|f| f.timeout_seconds));

        Ok(AppConfig {
            source_url,
            output_path,
            service: ServiceConfig { host },
            timeout_seconds,
        })
    }
}
