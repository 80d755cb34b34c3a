//! Organization transformer

use super::Transformer;
use crate::models::organization::{
    Ada, ImportantMessage, Jurisdiction, OrganizationLocation, SocialMedia,
};
use crate::models::{document_id, EntityKind, ObjectTag, OrganizationDocument, Slug};
use crate::rich_text;
use crate::source::{Element, Node};
use mdc_common::keys;

pub const DEFAULT_JURISDICTION: &str = "local";
pub const DEFAULT_LOCAL_TYPE: &str = "county";
pub const DEFAULT_COUNTY: &str = "miami-dade";

pub struct OrganizationTransformer;

impl Transformer for OrganizationTransformer {
    type Output = OrganizationDocument;
    const KIND: EntityKind = EntityKind::Organization;

    fn transform(org: &Element, slug: &str) -> OrganizationDocument {
        let mduid = org.value("mduid");

        let leader_title = org.optional("leaderTitle");
        let leader_title_other = leader_title
            .as_deref()
            .filter(|title| *title == "other")
            .map(|_| org.value("leaderTitleOther"));

        OrganizationDocument {
            doc_type: Self::KIND.root_element(),
            id: document_id(&mduid, Self::KIND, slug),
            jurisdiction: jurisdiction(org),
            name: org.value("name"),
            slug: Slug::new(slug),
            acronym: org.value("acronym"),
            legal_name: org.value("legalName"),
            beta_name: org.value("betaName"),
            description: org.value("description"),
            mission: rich_text::from_text(&org.value("mission")),
            overview: rich_text::from_text(&org.value("overview")),
            long_description: rich_text::from_text(&org.value("longDescription")),
            mduid,
            beta_url: org.optional("betaUrl"),
            contact_label: org.optional("contactLabel"),
            contact_url: org.optional("contactUrl"),
            about_label: org.optional("aboutLabel"),
            about_url: org.optional("aboutUrl"),
            leader_title,
            leader_title_other,
            leader_name: org.optional("leaderName"),
            leader_url: org.optional("leaderUrl"),
            locations: org.elements("locations").filter_map(location).collect(),
            social_media: org.elements("socialMedia").filter_map(social_media).collect(),
            twitter_feed: org.optional("twitterFeed"),
            ada: org.first_element("ada").and_then(ada),
            important_message: important_message(org),
        }
    }
}

/// County and municipality are mutually exclusive, selected by `localType`
fn jurisdiction(org: &Element) -> Jurisdiction {
    let local_type = org.value_or("localType", DEFAULT_LOCAL_TYPE);

    Jurisdiction {
        tag: ObjectTag,
        jurisdiction: org.value_or("jurisdiction", DEFAULT_JURISDICTION),
        county: (local_type == "county").then(|| org.value_or("county", DEFAULT_COUNTY)),
        municipality: (local_type == "municipality").then(|| org.value("municipality")),
        local_type,
        agency_type: org.value("agencyType"),
        sub_type: org.value("subType"),
    }
}

fn location(entry: &Element) -> Option<OrganizationLocation> {
    let location = entry.optional("location")?;

    Some(OrganizationLocation {
        tag: ObjectTag,
        key: keys::generate(),
        location,
        location_specifics: entry.value("locationSpecifics"),
        telephone: entry.value("telephone"),
        fax: entry.value("fax"),
        email: entry.value("email"),
        url: entry.value("url"),
    })
}

/// Channel name is the element text, the link its `url` attribute
fn social_media(entry: &Element) -> Option<SocialMedia> {
    let Some(Node::Element(channel)) = entry.nodes("socialChannel").first() else {
        return None;
    };

    let name = channel.own_text();
    let url = channel
        .attribute("url")
        .map(|url| url.trim().to_string())
        .unwrap_or_default();
    if name.is_empty() || url.is_empty() {
        return None;
    }

    Some(SocialMedia {
        tag: ObjectTag,
        key: keys::generate(),
        social_channel: name,
        url,
        social_channel_title: entry.value("socialChannelTitle"),
    })
}

fn ada(block: &Element) -> Option<Ada> {
    let disclaimer = block.value("adaDisclaimer");
    let ada = Ada {
        tag: ObjectTag,
        ada_disclaimer: rich_text::from_text(&disclaimer),
        ada_name: block.value("adaName"),
        ada_email: block.value("adaEmail"),
        ada_phone: block.value("adaPhone"),
    };

    let all_blank = disclaimer.is_empty()
        && ada.ada_name.is_empty()
        && ada.ada_email.is_empty()
        && ada.ada_phone.is_empty();
    (!all_blank).then_some(ada)
}

fn important_message(org: &Element) -> Option<ImportantMessage> {
    // Source element name carries a triple "s"
    let message_title = org.value("messsageTitle");
    let org_message = rich_text::from_text(&org.value("orgMessage"));
    if message_title.is_empty() && org_message.is_none() {
        return None;
    }

    Some(ImportantMessage {
        tag: ObjectTag,
        message_title,
        org_message,
    })
}
