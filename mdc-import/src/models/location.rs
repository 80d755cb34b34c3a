//! Location documents

use super::{ObjectTag, Slug};
use serde::Serialize;

/// `_type: "location"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDocument {
    #[serde(rename = "_type")]
    pub doc_type: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location_display_name: String,
    pub slug: Slug,
    pub featured: bool,
    pub physical_address: Address,
    pub mduid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_postal_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_hours: Option<PublicHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

/// Street or postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Address {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Weekly public hours
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicHours {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
    pub notes: String,
}

impl PublicHours {
    pub fn days(&self) -> [&DayHours; 7] {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ]
    }
}

/// One day: closed, or open with an open/close pair
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    pub is_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl DayHours {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(open: String, close: String) -> Self {
        Self {
            is_open: true,
            open: Some(open),
            close: Some(close),
        }
    }
}

/// Coordinates; each axis independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Geo {
    #[serde(rename = "_type")]
    pub tag: ObjectTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
}

impl Geo {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.lat.is_none() && self.long.is_none()
    }
}
