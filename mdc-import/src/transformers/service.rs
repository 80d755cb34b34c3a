//! Service transformer
//!
//! Services carry the widest source shape: flags, comma lists, markup rich
//! text, repeated contact containers and per-location weekly hours.

use super::location::DEFAULT_STATE;
use super::Transformer;
use crate::models::service::{
    Category, Detail, DocumentLink, EmailContact, MailAddress, OnlineChannel, PhoneContact,
    RelatedDocuments, ServiceFee, ServiceHours, ServiceImage, ServiceLocation,
};
use crate::models::{document_id, EntityKind, ObjectTag, Reference, ServiceDocument, Slug};
use crate::rich_text;
use crate::source::{non_empty, Element};
use mdc_common::keys;

pub const DEFAULT_FEE_TYPE: &str = "noFee";

pub struct ServiceTransformer;

impl Transformer for ServiceTransformer {
    type Output = ServiceDocument;
    const KIND: EntityKind = EntityKind::Service;

    fn transform(svc: &Element, slug: &str) -> ServiceDocument {
        let mduid = svc.value("mduid");

        ServiceDocument {
            doc_type: Self::KIND.root_element(),
            id: document_id(&mduid, Self::KIND, slug),
            organization: Reference::new(svc.value("organization")),
            name: svc.value("name"),
            slug: Slug::new(slug),
            description: svc.value("description"),
            long_description: rich_text::from_markup(&svc.value("longDescription")),
            mduid,
            sub_organization: svc.optional("subOrganization"),
            internal_service: svc.optional_flag("internal-service"),
            show_faqs: svc.optional_flag("show-faqs"),
            login_required: svc.optional_flag("login-required"),
            service_display_name: svc.optional("serviceDisplayName"),
            name_details: svc.optional("nameDetails"),
            external_url: svc.optional("externalUrl"),
            keywords: svc.optional("keywords"),
            alternate_names: svc.optional("alternateNames"),
            show_license_collection: svc.optional_flag("showLicenseCollection"),
            show_product_collection: svc.optional_flag("showProductCollection"),
            collection_title: svc.optional("collectionTitle"),
            close_sections: svc.optional_flag("closeSections"),
            categories: svc.elements("category").filter_map(category).collect(),
            audience: svc.list("audience"),
            self_service: svc.list("selfService"),
            service_fee: svc.first_element("serviceFee").and_then(service_fee),
            service_image: svc.first_element("serviceImage").and_then(service_image),
            details: svc.elements("details").filter_map(detail).collect(),
            online_channels: svc
                .elements("onlineChannelContainer")
                .filter_map(online_channel)
                .collect(),
            phone_contacts: svc.elements("phoneContainer").filter_map(phone).collect(),
            email_contacts: svc.elements("emailContainer").filter_map(email).collect(),
            mail_address: svc.first_element("mailContainer").and_then(mail_address),
            locations: svc.elements("locations").filter_map(location).collect(),
            related_documents: svc.first_element("document").and_then(related_documents),
            related_faqs: svc.list("serviceList"),
            products: svc.list("productList"),
            licenses: svc.list("licenseList"),
        }
    }
}

fn category(entry: &Element) -> Option<Category> {
    Some(Category {
        tag: ObjectTag,
        key: keys::generate(),
        main_category: entry.optional("mainCategory")?,
        sub_category: entry.value("subCategory"),
    })
}

fn service_fee(fee: &Element) -> Option<ServiceFee> {
    let type_fee = fee.optional("typeFee");
    let amount = fee.value("fee");
    let prices_vary = fee.value("pricesVary");
    if type_fee.is_none() && amount.is_empty() && prices_vary.is_empty() {
        return None;
    }

    Some(ServiceFee {
        tag: ObjectTag,
        type_fee: type_fee.unwrap_or_else(|| DEFAULT_FEE_TYPE.to_string()),
        fee: amount,
        prices_vary,
    })
}

fn service_image(image: &Element) -> Option<ServiceImage> {
    Some(ServiceImage {
        tag: ObjectTag,
        image_alt: image.optional("imageAlt")?,
    })
}

fn detail(entry: &Element) -> Option<Detail> {
    let detail = Detail {
        tag: ObjectTag,
        key: keys::generate(),
        title: entry.value("title"),
        custom_title: entry.value("customTitle"),
        content: rich_text::from_markup(&entry.value("content")),
    };

    let blank = detail.title.is_empty() && detail.custom_title.is_empty() && detail.content.is_none();
    (!blank).then_some(detail)
}

fn online_channel(entry: &Element) -> Option<OnlineChannel> {
    let label = entry.value("label");
    let url = entry.value("url");
    if label.is_empty() && url.is_empty() {
        return None;
    }

    Some(OnlineChannel {
        tag: ObjectTag,
        key: keys::generate(),
        channel_type: entry.value("type"),
        label,
        url,
        open_in_new_window: entry.flag("urlType"),
    })
}

fn phone(entry: &Element) -> Option<PhoneContact> {
    Some(PhoneContact {
        tag: ObjectTag,
        key: keys::generate(),
        phone: entry.optional("phone")?,
        phone_label: entry.value("phoneLabel"),
    })
}

fn email(entry: &Element) -> Option<EmailContact> {
    Some(EmailContact {
        tag: ObjectTag,
        key: keys::generate(),
        email: entry.optional("email")?,
        email_label: entry.value("emailLabel"),
    })
}

fn mail_address(mail: &Element) -> Option<MailAddress> {
    let state = mail.optional("state");
    let address = MailAddress {
        tag: ObjectTag,
        attention: mail.value("attention"),
        address: mail.value("address"),
        address2: mail.value("address2"),
        city: mail.value("city"),
        state: String::new(),
        zip: mail.value("zip"),
    };

    let blank = state.is_none()
        && [
            &address.attention,
            &address.address,
            &address.address2,
            &address.city,
            &address.zip,
        ]
        .iter()
        .all(|line| line.is_empty());
    if blank {
        return None;
    }

    Some(MailAddress {
        state: state.unwrap_or_else(|| DEFAULT_STATE.to_string()),
        ..address
    })
}

fn location(entry: &Element) -> Option<ServiceLocation> {
    let location = entry.optional("location")?;

    Some(ServiceLocation {
        tag: ObjectTag,
        key: keys::generate(),
        open_accordion: entry.flag("openAccordion"),
        location,
        location_specifics: entry.value("locationSpecifics"),
        telephone: entry.value("telephone"),
        location_has_hours: entry.flag("locationHasHours"),
        public_hours: entry.first_element("publicHours").and_then(service_hours),
    })
}

/// Hours come from the `open`/`close` attributes of each day element
fn service_hours(hours: &Element) -> Option<ServiceHours> {
    let day = |name: &str| {
        (
            hours.child_attribute(name, "open"),
            hours.child_attribute(name, "close"),
        )
    };

    let (monday_open, monday_close) = day("monday");
    let (tuesday_open, tuesday_close) = day("tuesday");
    let (wednesday_open, wednesday_close) = day("wednesday");
    let (thursday_open, thursday_close) = day("thursday");
    let (friday_open, friday_close) = day("friday");
    let (saturday_open, saturday_close) = day("saturday");
    let (sunday_open, sunday_close) = day("sunday");

    let hours = ServiceHours {
        tag: ObjectTag,
        monday_open,
        monday_close,
        tuesday_open,
        tuesday_close,
        wednesday_open,
        wednesday_close,
        thursday_open,
        thursday_close,
        friday_open,
        friday_close,
        saturday_open,
        saturday_close,
        sunday_open,
        sunday_close,
        notes: hours.value("notes"),
    };

    (hours != ServiceHours::default()).then_some(hours)
}

fn related_documents(block: &Element) -> Option<RelatedDocuments> {
    let documents: Vec<DocumentLink> = block
        .elements("documentinfo")
        .filter_map(|info| {
            let name = info.value("documentname");
            let url = info.value("documenturl");
            (!name.is_empty() || !url.is_empty()).then(|| DocumentLink {
                tag: ObjectTag,
                key: keys::generate(),
                document_name: name,
                document_url: url,
            })
        })
        .collect();

    let disclaimer = non_empty(block.value("documentdisclaimer"));
    if documents.is_empty() && disclaimer.is_none() {
        return None;
    }

    Some(RelatedDocuments {
        tag: ObjectTag,
        document_disclaimer: disclaimer.unwrap_or_default(),
        documents,
    })
}
