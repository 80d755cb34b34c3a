//! Taxonomy documents

use super::{ObjectTag, Slug};
use serde::Serialize;

/// `_type: "taxonomy"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyDocument {
    #[serde(rename = "_type")]
    pub doc_type: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
    pub list_name: String,
    pub slug: Slug,
    pub label_only: bool,
    pub mduid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<TaxonomyOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organizations: Vec<TaxonomyOrganization>,
}

/// Label/value pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxonomyOption {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyOrganization {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub organization_name: String,
}
