//! mdc-import library interface
//!
//! Converts the county's XML content exports (locations, organizations,
//! services, taxonomies) into content-store documents. Exposed as a library
//! for the `mdc-import` binary and for integration testing.

pub mod error;
pub mod models;
pub mod rich_text;
pub mod services;
pub mod source;
pub mod transformers;

pub use crate::error::{ImportError, ImportResult};
pub use crate::models::{Document, EntityKind, ImportSummary};
pub use crate::services::BatchRunner;
