use crate::core::{ConfigProvider, FetchOutcome, FetchReport, Storage};
use crate::utils::error::{error_chain, Result};
use reqwest::Client;

/// Downloads the CSV resource and writes it through a [`Storage`].
pub struct CsvFetcher<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> CsvFetcher<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(storage, config, client))
    }

    pub fn with_client(storage: S, config: C, client: Client) -> Self {
        Self {
            storage,
            config,
            client,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Fetches the resource and replaces the output file with it.
    ///
    /// A failed download (unreachable host, DNS failure, error status) is
    /// reported as [`FetchOutcome::Unavailable`] and leaves the output file
    /// untouched. A body that is not UTF-8 and a failed write are returned
    /// as errors.
    pub async fn execute(&self) -> Result<FetchOutcome> {
        let url = self.config.source_url();
        tracing::info!("Fetching CSV from {}", url);

        let body = match self.download(url).await {
            Ok(body) => body,
            Err(e) => {
                let detail = error_chain(&e);
                tracing::warn!("Could not get CSV file from {}: {}", url, detail);
                return Ok(FetchOutcome::Unavailable { detail });
            }
        };

        let text = String::from_utf8(body)?;
        let path = self.config.output_path();
        self.storage.write_file(path, text.as_bytes()).await?;

        let report = FetchReport {
            path: path.to_string(),
            bytes_written: text.len(),
            rows: count_rows(&text),
            fetched_at: chrono::Utc::now(),
        };
        tracing::info!(
            "Saved {} bytes ({} rows) to {}",
            report.bytes_written,
            report
                .rows
                .map_or_else(|| "unknown".to_string(), |r| r.to_string()),
            report.path
        );

        Ok(FetchOutcome::Written(report))
    }

    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("CSV response status: {}", response.status());

        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Counts data rows after the header line. `None` when the text is not
/// readable as CSV; the file is stored either way.
fn count_rows(text: &str) -> Option<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = 0;
    for record in reader.records() {
        if let Err(e) = record {
            tracing::debug!("Skipping row count: {}", e);
            return None;
        }
        rows += 1;
    }
    Some(rows)
}
