//! Per-kind document transformers
//!
//! Each transformer is a pure function from a source root element and the
//! source file name (the slug) to a target document. Apart from array entry
//! `_key`s, the same input always produces the same output.

pub mod location;
pub mod organization;
pub mod service;
pub mod taxonomy;

pub use location::LocationTransformer;
pub use organization::OrganizationTransformer;
pub use service::ServiceTransformer;
pub use taxonomy::TaxonomyTransformer;

use crate::error::{ImportError, ImportResult};
use crate::models::{Document, EntityKind};
use crate::services::file_scanner::file_name;
use crate::source::{parse_document, Element, Node, SourceDocument};
use std::path::Path;

/// Converts a source root element into a target document
pub trait Transformer {
    /// Target document type
    type Output;

    /// Entity kind handled
    const KIND: EntityKind;

    /// Build the document for `root`, read from a file named `slug`
    fn transform(root: &Element, slug: &str) -> Self::Output;
}

/// Read and parse one source file
pub fn load_source(path: &Path) -> ImportResult<SourceDocument> {
    let xml = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_document(&xml)?)
}

/// Root element of `kind`, or a structural error
pub fn required_root(source: &SourceDocument, kind: EntityKind) -> ImportResult<&Element> {
    let expected = kind.root_element();
    if source.root_name != expected {
        return Err(ImportError::MissingRoot {
            expected: expected.to_string(),
            found: source.root_name.clone(),
        });
    }

    match &source.root {
        Node::Element(element) => Ok(element),
        Node::Scalar(_) => Err(ImportError::EmptyRoot(expected.to_string())),
    }
}

/// Transform a parsed source document into a document of `kind`
pub fn transform_document(
    kind: EntityKind,
    source: &SourceDocument,
    slug: &str,
) -> ImportResult<Document> {
    let root = required_root(source, kind)?;
    let document = match kind {
        EntityKind::Location => Document::Location(LocationTransformer::transform(root, slug)),
        EntityKind::Organization => {
            Document::Organization(OrganizationTransformer::transform(root, slug))
        }
        EntityKind::Service => Document::Service(ServiceTransformer::transform(root, slug)),
        EntityKind::Taxonomy => Document::Taxonomy(TaxonomyTransformer::transform(root, slug)),
    };
    Ok(document)
}

/// Transform source markup held in memory
pub fn transform_str(kind: EntityKind, xml: &str, slug: &str) -> ImportResult<Document> {
    let source = parse_document(xml)?;
    transform_document(kind, &source, slug)
}

/// Read, parse and transform one source file; the file name is the slug
pub fn transform_file(kind: EntityKind, path: &Path) -> ImportResult<Document> {
    let source = load_source(path)?;
    transform_document(kind, &source, &file_name(path))
}
