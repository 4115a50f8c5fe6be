use crate::domain::model::ServiceConfig;
use crate::utils::error::Result;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Replaces any existing content at `path`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn service_config(&self) -> &ServiceConfig;
    fn request_timeout(&self) -> Option<Duration> {
        None
    }
}
