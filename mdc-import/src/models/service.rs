//! Service documents

use super::{ObjectTag, Reference, Slug};
use crate::rich_text::RichText;
use serde::Serialize;

/// `_type: "service"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDocument {
    #[serde(rename = "_type")]
    pub doc_type: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
    pub organization: Reference,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<RichText>,
    pub mduid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_faqs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_license_collection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_product_collection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_sections: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audience: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub self_service: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<ServiceFee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_image: Option<ServiceImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Detail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub online_channels: Vec<OnlineChannel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_contacts: Vec<PhoneContact>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_contacts: Vec<EmailContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_address: Option<MailAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ServiceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_documents: Option<RelatedDocuments>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_faqs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub main_category: String,
    pub sub_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFee {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub type_fee: String,
    pub fee: String,
    pub prices_vary: String,
}

/// Image metadata; the binary asset is uploaded separately
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceImage {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub title: String,
    pub custom_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineChannel {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub label: String,
    pub url: String,
    pub open_in_new_window: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneContact {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub phone_label: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContact {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub email_label: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailAddress {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub attention: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// In-person location of a service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub open_accordion: bool,
    pub location: String,
    pub location_specifics: String,
    pub telephone: String,
    pub location_has_hours: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_hours: Option<ServiceHours>,
}

/// Flat weekly hours used by service locations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHours {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub monday_open: String,
    pub monday_close: String,
    pub tuesday_open: String,
    pub tuesday_close: String,
    pub wednesday_open: String,
    pub wednesday_close: String,
    pub thursday_open: String,
    pub thursday_close: String,
    pub friday_open: String,
    pub friday_close: String,
    pub saturday_open: String,
    pub saturday_close: String,
    pub sunday_open: String,
    pub sunday_close: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedDocuments {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub document_disclaimer: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLink {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(rename = "_key")]
    pub key: String,
    pub document_name: String,
    pub document_url: String,
}
