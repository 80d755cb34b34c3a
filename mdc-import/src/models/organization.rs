//! Organization documents

use super::{ObjectTag, Slug};
use crate::rich_text::RichText;
use serde::Serialize;

/// `_type: "organization"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDocument {
    #[serde(rename = "_type")]
    pub doc_type: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
    pub jurisdiction: Jurisdiction,
    pub name: String,
    pub slug: Slug,
    pub acronym: String,
    pub legal_name: String,
    pub beta_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<RichText>,
    pub mduid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_title_other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<OrganizationLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_media: Vec<SocialMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_feed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ada: Option<Ada>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_message: Option<ImportantMessage>,
}

/// Jurisdiction hierarchy
///
/// `county` is set only for `localType = county`, `municipality` only for
/// `localType = municipality`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub jurisdiction: String,
    pub local_type: String,
    pub agency_type: String,
    pub sub_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
}

/// Location reference with contact details
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationLocation {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub location: String,
    pub location_specifics: String,
    pub telephone: String,
    pub fax: String,
    pub email: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub social_channel: String,
    pub url: String,
    pub social_channel_title: String,
}

/// Accessibility contact block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ada {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ada_disclaimer: Option<RichText>,
    pub ada_name: String,
    pub ada_email: String,
    pub ada_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantMessage {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub message_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_message: Option<RichText>,
}
