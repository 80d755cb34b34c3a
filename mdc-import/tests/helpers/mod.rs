//! Test Helper Utilities
//!
//! Shared utilities for testing mdc-import

#![allow(dead_code)]

pub mod fake_store;
pub mod fixtures;

pub use fake_store::FakeStore;
pub use fixtures::{read_ndjson, write_source, SourceTree};
