//! Acceptance checker for the name-matching search service
//!
//! Loads reference records with known expected outcomes, looks every record
//! up against a running search service under a concurrency cap, and
//! reconciles the responses into a discrepancy report.

pub mod error;
pub mod types;
pub mod traits;
pub mod core;
pub mod services;
pub mod checker_impl;

/// Component name used for log filtering and structured log fields
pub const COMPONENT: &str = "checker";

// Re-export main types
pub use error::{CheckerError, CheckerResult};
pub use types::*;
pub use traits::*;
pub use checker_impl::Checker;
pub use services::*;
