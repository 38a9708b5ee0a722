//! Process-wide cap on lookups in flight

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

use shared::LookupFailure;
use crate::error::{CheckerError, CheckerResult};

/// Gate that lets at most `capacity` wrapped calls run at once.
///
/// Waiters are served in FIFO order by the underlying semaphore. The permit
/// is held for the whole wrapped call and released on every exit path.
#[derive(Debug)]
pub struct ConcurrencyLimiter {
    semaphore: Semaphore,
    capacity: usize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ConcurrencyLimiter {
    pub fn new(capacity: usize) -> CheckerResult<Self> {
        if capacity == 0 {
            return Err(CheckerError::ConfigError {
                message: "concurrency limit must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            semaphore: Semaphore::new(capacity),
            capacity,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        })
    }

    /// Run `task` once a slot is free
    pub async fn run<F>(&self, task: F) -> Result<F::Output, LookupFailure>
    where
        F: Future,
    {
        let _permit = self.semaphore.acquire().await.map_err(|_| LookupFailure::Dispatch {
            message: "concurrency limiter closed".to_string(),
        })?;
        let _slot = InFlightSlot::enter(&self.in_flight, &self.peak);

        Ok(task.await)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Calls currently holding a slot
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of calls that held a slot at the same time
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

struct InFlightSlot<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> InFlightSlot<'a> {
    fn enter(in_flight: &'a AtomicUsize, peak: &AtomicUsize) -> Self {
        let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
