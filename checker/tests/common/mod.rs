//! Common test utilities for checker integration tests

#![allow(dead_code)] // Not every test binary uses every helper

pub mod fixtures;
pub mod helpers;
