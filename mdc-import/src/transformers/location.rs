//! Location transformer

use super::Transformer;
use crate::models::location::{Address, DayHours, Geo, PublicHours};
use crate::models::{document_id, EntityKind, LocationDocument, ObjectTag, Slug};
use crate::source::{Element, Node};

/// Default state for every address
pub const DEFAULT_STATE: &str = "FL";

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub struct LocationTransformer;

impl Transformer for LocationTransformer {
    type Output = LocationDocument;
    const KIND: EntityKind = EntityKind::Location;

    fn transform(loc: &Element, slug: &str) -> LocationDocument {
        let mduid = loc.value("mduid");

        let has_postal = loc.flag("postal");
        let postal_address = loc
            .first_element("postalAddress")
            .filter(|_| has_postal)
            .map(|postal| address(Some(postal)));

        LocationDocument {
            doc_type: Self::KIND.root_element(),
            id: document_id(&mduid, Self::KIND, slug),
            name: loc.value("name"),
            location_display_name: loc.value("location-display-name"),
            slug: Slug::new(slug),
            featured: loc.flag("featured"),
            physical_address: address(loc.first_element("physicalAddress")),
            mduid,
            has_postal_address: postal_address.as_ref().map(|_| true),
            postal_address,
            public_hours: loc.first_element("publicHours").and_then(public_hours),
            geo: loc.first_element("geo").and_then(geo),
        }
    }
}

/// Address block; a missing element yields empty lines and the default state
pub fn address(source: Option<&Element>) -> Address {
    let empty = Element::default();
    let source = source.unwrap_or(&empty);

    Address {
        tag: ObjectTag,
        address1: source.value("address1"),
        address2: source.value("address2"),
        city: source.value("city"),
        state: source.value_or("state", DEFAULT_STATE),
        zip: source.value("zip"),
    }
}

/// Omitted unless some day is open or the notes are non-blank
fn public_hours(hours: &Element) -> Option<PublicHours> {
    let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] =
        WEEKDAYS.map(|day| day_hours(hours, day));

    let hours = PublicHours {
        tag: ObjectTag,
        monday,
        tuesday,
        wednesday,
        thursday,
        friday,
        saturday,
        sunday,
        notes: hours.value("notes"),
    };

    let any_open = hours.days().iter().any(|day| day.is_open);
    (any_open || !hours.notes.is_empty()).then_some(hours)
}

/// A day is open when its element has `open`/`close` attributes or text
fn day_hours(hours: &Element, day: &str) -> DayHours {
    match hours.nodes(day).first() {
        None => DayHours::closed(),
        Some(Node::Scalar(text)) if text.trim().is_empty() => DayHours::closed(),
        Some(Node::Scalar(_)) => DayHours::open(String::new(), String::new()),
        Some(Node::Element(element)) => {
            let open = attribute(element, "open");
            let close = attribute(element, "close");
            if open.is_empty() && close.is_empty() && element.own_text().is_empty() {
                DayHours::closed()
            } else {
                DayHours::open(open, close)
            }
        }
    }
}

fn geo(element: &Element) -> Option<Geo> {
    let geo = Geo {
        tag: ObjectTag,
        x: coordinate(element, "x"),
        y: coordinate(element, "y"),
        lat: coordinate(element, "lat"),
        long: coordinate(element, "long"),
    };
    (!geo.is_empty()).then_some(geo)
}

fn coordinate(element: &Element, name: &str) -> Option<f64> {
    let raw = element.attribute(name)?.trim();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            if !raw.is_empty() {
                tracing::warn!("Ignoring non-numeric {} coordinate {:?}", name, raw);
            }
            None
        }
    }
}

fn attribute(element: &Element, name: &str) -> String {
    element
        .attribute(name)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
