//! Checker services implementations

pub mod lookup_client;
pub mod record_source;
pub mod console_reporter;

#[cfg(test)]
pub mod tests;

pub use lookup_client::*;
pub use record_source::*;
pub use console_reporter::*;
