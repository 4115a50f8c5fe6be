use clap::Parser;
use incendios_fetch::utils::error::ErrorSeverity;
use incendios_fetch::utils::{logger, validation::Validate};
use incendios_fetch::{CliConfig, CsvFetcher, FetchOutcome, LocalStorage, Runner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting incendios-fetch");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let fetcher = CsvFetcher::new(LocalStorage::default(), config)?;
    let runner = Runner::new(fetcher);

    match runner.run().await {
        Ok(summary) => {
            println!("{}", summary.message());
            if let FetchOutcome::Unavailable { .. } = summary.outcome {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
