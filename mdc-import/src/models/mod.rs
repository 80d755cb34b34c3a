//! Document and import-run data models

pub mod common;
pub mod import_result;
pub mod import_session;
pub mod kind;
pub mod location;
pub mod organization;
pub mod service;
pub mod taxonomy;

pub use common::{document_id, ObjectTag, Reference, Slug};
pub use import_result::{FileFailure, ImportSummary};
pub use import_session::{BatchState, ImportSession, StateTransition};
pub use kind::EntityKind;
pub use location::LocationDocument;
pub use organization::OrganizationDocument;
pub use service::ServiceDocument;
pub use taxonomy::TaxonomyDocument;

use serde::Serialize;

/// A converted document of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Location(LocationDocument),
    Organization(OrganizationDocument),
    Service(ServiceDocument),
    Taxonomy(TaxonomyDocument),
}

impl Document {
    /// Document `_id`
    pub fn id(&self) -> &str {
        match self {
            Document::Location(doc) => &doc.id,
            Document::Organization(doc) => &doc.id,
            Document::Service(doc) => &doc.id,
            Document::Taxonomy(doc) => &doc.id,
        }
    }

    /// Human-readable label for progress logging
    pub fn label(&self) -> &str {
        match self {
            Document::Location(doc) => &doc.name,
            Document::Organization(doc) => &doc.name,
            Document::Service(doc) => &doc.name,
            Document::Taxonomy(doc) => &doc.list_name,
        }
    }
}
