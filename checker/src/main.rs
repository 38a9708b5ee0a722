//! Checker binary entry point

use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;

use shared::logging::{init_tracing_with_level, log_error};
use checker::{
    COMPONENT, Checker, CheckerConfig, CheckerResult,
    services::{ConsoleReporter, JsonFileRecordSource},
};

#[derive(Parser)]
#[command(name = "checker")]
#[command(about = "Acceptance checker for the name-matching search service")]
struct Args {
    /// JSON file with the reference records
    #[arg(long)]
    records: Option<PathBuf>,

    /// Base URL of the search service
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Maximum number of lookups in flight
    #[arg(long)]
    max_concurrent: Option<usize>,

    /// Write the run summary as JSON to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Maximum number of entries the service returns per lookup
    #[arg(long)]
    count: Option<u32>,

    /// Minimum per-word similarity coefficient passed to the service
    #[arg(long)]
    min_coefficient: Option<f64>,

    /// Minimum average similarity coefficient passed to the service
    #[arg(long)]
    min_average_coefficient: Option<f64>,

    /// Verify TLS certificates of the search service
    #[arg(long)]
    verify_certs: bool,

    /// Log level for checker output
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Apply command-line flags over the environment configuration
    fn apply(self, mut config: CheckerConfig) -> CheckerConfig {
        if let Some(records) = self.records {
            config.records_path = records;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(max) = self.max_concurrent {
            config.max_concurrent = max;
        }
        if self.summary.is_some() {
            config.summary_path = self.summary;
        }
        if self.count.is_some() {
            config.search_options.count = self.count;
        }
        if self.min_coefficient.is_some() {
            config.search_options.min_coefficient = self.min_coefficient;
        }
        if self.min_average_coefficient.is_some() {
            config.search_options.min_average_coefficient = self.min_average_coefficient;
        }
        if self.verify_certs {
            config.accept_invalid_certs = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> CheckerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_tracing_with_level(COMPONENT, Some(args.log_level.as_str()));

    let config = args.apply(CheckerConfig::from_env()?);
    let source = JsonFileRecordSource::new(config.records_path.clone());
    let reporter = ConsoleReporter::new(config.summary_path.clone());

    let checker = Checker::new(config, source, reporter)
        .inspect_err(|e| log_error(COMPONENT, "Configuration", e))?;

    checker
        .run()
        .await
        .inspect_err(|e| log_error(COMPONENT, "Acceptance run", e))?;

    Ok(())
}
