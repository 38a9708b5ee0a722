//! Checker core logic

pub mod dispatcher;
pub mod limiter;
pub mod normalize;
pub mod reconciler;
pub mod report;

pub use dispatcher::Dispatcher;
pub use limiter::ConcurrencyLimiter;
pub use normalize::{RawRecord, normalize_record, split_client_name};
pub use reconciler::{ReconciliationOutcome, Reconciler, classify, reconcile};
pub use report::render_summary;
