//! Shared types for the search-service acceptance checker
//!
//! Contains the data model that flows between the record source, the
//! dispatcher, the reconciler and the reporter.

pub mod types;
pub mod errors;
pub mod summary;
pub mod logging;

pub use types::*;
pub use errors::*;
pub use summary::*;
