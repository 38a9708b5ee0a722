//! Run driver: fetch records, dispatch lookups, reconcile, report

use std::time::Instant;

use shared::RunSummary;
use shared::logging::{log_error, log_progress, log_startup, log_success};
use crate::COMPONENT;
use crate::core::{Dispatcher, reconcile};
use crate::error::CheckerResult;
use crate::services::RealLookupClient;
use crate::traits::{LookupClient, RecordSource, Reporter};
use crate::types::CheckerConfig;

/// One end-to-end checker run with injected record source and reporter
pub struct Checker<S: RecordSource, R: Reporter> {
    config: CheckerConfig,
    source: S,
    reporter: R,
}

impl<S: RecordSource, R: Reporter> Checker<S, R> {
    pub fn new(config: CheckerConfig, source: S, reporter: R) -> CheckerResult<Self> {
        config.validate()?;
        Ok(Self { config, source, reporter })
    }

    /// Run against the configured search service over a fresh HTTP session
    pub async fn run(&self) -> CheckerResult<RunSummary> {
        let client = RealLookupClient::new(&self.config)?;
        self.run_with_client(client).await
    }

    /// Run with a caller-supplied lookup client.
    ///
    /// The client is owned for the duration of the dispatch and dropped
    /// before reconciliation, whatever the individual lookups returned.
    pub async fn run_with_client<L: LookupClient>(&self, client: L) -> CheckerResult<RunSummary> {
        let started = Instant::now();
        log_startup(COMPONENT, &format!("acceptance run against {}", self.config.base_url));

        let records = self.source.fetch_records().await?;
        log_progress(COMPONENT, "Records loaded", &format!("{} records", records.len()));

        let dispatched = {
            let dispatcher = Dispatcher::new(client, self.config.max_concurrent)?;
            dispatcher.dispatch_all(records).await
        };

        let summary = reconcile(&dispatched);
        let elapsed = started.elapsed();
        // Reporting failures are logged; the summary still stands
        if let Err(e) = self.reporter.report(&summary, elapsed).await {
            log_error(COMPONENT, "Summary report", &e);
        }

        log_success(
            COMPONENT,
            &format!(
                "Run finished in {:.3}s: {} matches, {} mismatches, {} failed",
                elapsed.as_secs_f64(),
                summary.matches,
                summary.mismatches(),
                summary.failed_requests.len()
            ),
        );
        Ok(summary)
    }
}
