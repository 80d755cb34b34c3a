//! # MDC Common Library
//!
//! Shared code for the Miami-Dade content import tools including:
//! - Error type shared across crates
//! - Configuration loading (CLI > environment > TOML > defaults)
//! - Per-entry key generation for document arrays

pub mod config;
pub mod error;
pub mod keys;

pub use error::{Error, Result};
