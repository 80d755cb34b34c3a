//! Shapes shared by every document kind

use super::EntityKind;
use serde::{Serialize, Serializer};

/// `_type: "object"` marker for nested objects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectTag;

impl Serialize for ObjectTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("object")
    }
}

/// Slug field (`{ _type: "slug", current }`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slug {
    #[serde(rename = "_type")]
    pub slug_type: &'static str,
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            slug_type: "slug",
            current: current.into(),
        }
    }
}

/// Reference to another document (`{ _type: "reference", _ref }`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    #[serde(rename = "_type")]
    pub reference_type: &'static str,
    #[serde(rename = "_ref")]
    pub target: String,
}

impl Reference {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            reference_type: "reference",
            target: target.into(),
        }
    }
}

/// Document id: the external identifier, else `<prefix>-<slug>`
pub fn document_id(mduid: &str, kind: EntityKind, slug: &str) -> String {
    if mduid.is_empty() {
        format!("{}-{}", kind.id_prefix(), slug)
    } else {
        mduid.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_fallback() {
        assert_eq!(document_id("", EntityKind::Location, "main-library"), "loc-main-library");
        assert_eq!(document_id("", EntityKind::Organization, "police"), "org-police");
        assert_eq!(document_id("", EntityKind::Service, "pay-fee"), "ser-pay-fee");
        assert_eq!(document_id("", EntityKind::Taxonomy, "colors"), "tax-colors");
        assert_eq!(document_id("MD-123", EntityKind::Taxonomy, "colors"), "MD-123");
    }

    #[test]
    fn test_tag_shapes() {
        assert_eq!(serde_json::to_value(ObjectTag).unwrap(), "object");
        assert_eq!(
            serde_json::to_value(Slug::new("police")).unwrap(),
            serde_json::json!({"_type": "slug", "current": "police"})
        );
        assert_eq!(
            serde_json::to_value(Reference::new("org-1")).unwrap(),
            serde_json::json!({"_type": "reference", "_ref": "org-1"})
        );
    }
}
