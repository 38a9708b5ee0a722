//! Bounded fan-out of lookups over the whole record set

use std::sync::atomic::{AtomicUsize, Ordering};
use futures_util::future::join_all;

use shared::{DispatchedLookup, LookupOutcome, LookupQuery, TestRecord};
use crate::core::limiter::ConcurrencyLimiter;
use crate::error::CheckerResult;
use crate::traits::LookupClient;

/// Completed lookups between two progress log lines
const PROGRESS_INTERVAL: usize = 1000;

/// Drives every record through the lookup client under the concurrency cap
pub struct Dispatcher<L: LookupClient> {
    client: L,
    limiter: ConcurrencyLimiter,
    completed: AtomicUsize,
}

impl<L: LookupClient> Dispatcher<L> {
    pub fn new(client: L, max_concurrent: usize) -> CheckerResult<Self> {
        Ok(Self {
            client,
            limiter: ConcurrencyLimiter::new(max_concurrent)?,
            completed: AtomicUsize::new(0),
        })
    }

    pub fn limiter(&self) -> &ConcurrencyLimiter {
        &self.limiter
    }

    /// Look up every record and pair it with its outcome.
    ///
    /// All lookups start at once and wait on the limiter; the result is in
    /// input order whatever order the calls complete in.
    pub async fn dispatch_all(&self, records: Vec<TestRecord>) -> Vec<DispatchedLookup> {
        let total = records.len();
        tracing::info!(
            records = total,
            max_concurrent = self.limiter.capacity(),
            "🚀 Dispatching lookups"
        );

        let lookups = records.into_iter().map(|record| self.dispatch_one(record, total));
        let dispatched = join_all(lookups).await;

        let failed = dispatched.iter().filter(|d| d.outcome.is_failed()).count();
        tracing::info!(
            records = dispatched.len(),
            failed = failed,
            peak_in_flight = self.limiter.peak(),
            "✅ All lookups finished"
        );
        dispatched
    }

    async fn dispatch_one(&self, record: TestRecord, total: usize) -> DispatchedLookup {
        let query = LookupQuery::from_record(&record);

        let outcome = match self.limiter.run(self.client.lookup(query)).await {
            Ok(outcome) => outcome,
            Err(failure) => LookupOutcome::Failed(failure),
        };

        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        if done % PROGRESS_INTERVAL == 0 {
            tracing::info!("📋 Progress: {}/{} lookups completed", done, total);
        }

        DispatchedLookup { record, outcome }
    }
}
