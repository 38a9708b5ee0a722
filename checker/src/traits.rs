//! Checker trait definitions for dependency injection

use std::time::Duration;
use async_trait::async_trait;

use shared::{LookupOutcome, LookupQuery, RunSummary, TestRecord};
use crate::error::CheckerResult;

/// One outbound call to the search service per record
#[mockall::automock]
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Look up a single record. Every failure is folded into `LookupOutcome::Failed`.
    async fn lookup(&self, query: LookupQuery) -> LookupOutcome;
}

/// Source of the reference dataset
#[mockall::automock]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the complete, ordered record set before any dispatch starts
    async fn fetch_records(&self) -> CheckerResult<Vec<TestRecord>>;
}

/// Sink for the final run summary
#[mockall::automock]
#[async_trait]
pub trait Reporter: Send + Sync {
    /// Render or store the summary of a finished run
    async fn report(&self, summary: &RunSummary, elapsed: Duration) -> CheckerResult<()>;
}
