use crate::adapters::http::ServiceAdapter;
use crate::core::fetch::CsvFetcher;
use crate::core::{ConfigProvider, FetchOutcome, Storage};
use crate::utils::error::Result;

#[derive(Debug)]
pub struct RunSummary {
    pub outcome: FetchOutcome,
    /// Built from the service settings once the CSV is stored.
    pub adapter: Option<ServiceAdapter>,
}

impl RunSummary {
    pub fn message(&self) -> String {
        self.outcome.message()
    }
}

pub struct Runner<S: Storage, C: ConfigProvider> {
    fetcher: CsvFetcher<S, C>,
}

impl<S: Storage, C: ConfigProvider> Runner<S, C> {
    pub fn new(fetcher: CsvFetcher<S, C>) -> Self {
        Self { fetcher }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting CSV download");

        let outcome = self.fetcher.execute().await?;

        let adapter = match &outcome {
            FetchOutcome::Written(report) => {
                tracing::info!("CSV stored at {}", report.path);
                let service = self.fetcher.config().service_config().clone();
                if service.host.is_none() {
                    tracing::debug!("No service host configured");
                }
                Some(ServiceAdapter::new(service))
            }
            FetchOutcome::Unavailable { .. } => None,
        };

        Ok(RunSummary { outcome, adapter })
    }
}
