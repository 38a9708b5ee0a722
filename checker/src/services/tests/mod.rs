//! Tests for checker services
//!
//! HTTP behaviour is exercised against a wiremock server; file-backed
//! services use temporary files.

pub mod record_source;
pub mod console_reporter;
