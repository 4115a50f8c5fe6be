pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{http::ServiceAdapter, storage::LocalStorage};
pub use crate::config::AppConfig;
pub use crate::core::{
    fetch::CsvFetcher,
    runner::{RunSummary, Runner},
};
pub use crate::domain::model::{FetchOutcome, FetchReport, ServiceConfig};
pub use crate::utils::error::{FetchError, Result};
