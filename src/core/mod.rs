pub mod fetch;
pub mod runner;

pub use crate::domain::model::{FetchOutcome, FetchReport, ServiceConfig};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
