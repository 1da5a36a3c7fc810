// src/domain/listing.rs

use crate::listings::{ListingsResponse, RawListing};
use serde_json::Value;
use std::fmt;

pub const NO_TITLE: &str = "No Title Available";
pub const NO_REGION: &str = "No Region";
pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_AGENT: &str = "Unknown Agent";
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";

/// Descriptions longer than this are previewed behind a "Read More" toggle.
pub const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Opaque listing identifier. The API sends either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_raw(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::String(s)) => Self(s.clone()),
            Some(Value::Number(n)) => Self(n.to_string()),
            _ => Self(String::new()),
        }
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bathrooms are either a count or the literal "N/A".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BathCount {
    Count(f64),
    NotAvailable,
}

impl fmt::Display for BathCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BathCount::Count(n) => write!(f, "{n}"),
            BathCount::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// A fully-defaulted, display-ready projection of a `RawListing`.
/// No field is ever missing; expansion state lives with the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingViewModel {
    pub id: ListingId,
    pub image_url: String,
    pub title: String,
    pub address: String,
    pub bed_count: i64,
    pub bath_count: BathCount,
    pub area_sqft: i64,
    pub agent_avatar_url: String,
    pub agent_name: String,
    pub price: f64,
    pub description: String,
}

impl ListingViewModel {
    /// Maps one raw record, defaulting every field on its own.
    ///
    /// Empty strings, zeros and non-finite numbers count as missing, the same
    /// as an absent field.
    pub fn from_raw(raw: &RawListing) -> Self {
        let description = present_text(raw.description.as_deref());
        let new_param = raw.new_param.as_ref();
        let agent = raw.agent.as_ref();

        ListingViewModel {
            id: ListingId::from_raw(raw.id.as_ref()),
            image_url: present_text(raw.first_photo()).unwrap_or("").to_string(),
            title: description.unwrap_or(NO_TITLE).to_string(),
            address: present_text(raw.region.as_deref())
                .unwrap_or(NO_REGION)
                .to_string(),
            bed_count: present_number(new_param.and_then(|p| p.bedroom_min))
                .map_or(0, |n| n.trunc() as i64),
            bath_count: present_number(new_param.and_then(|p| p.bathroom_min))
                .map_or(BathCount::NotAvailable, BathCount::Count),
            area_sqft: present_number(new_param.and_then(|p| p.min_size))
                .map_or(0, |n| n.trunc() as i64),
            agent_avatar_url: present_text(agent.and_then(|a| a.avatar.as_deref()))
                .unwrap_or(DEFAULT_AVATAR)
                .to_string(),
            agent_name: present_text(agent.and_then(|a| a.name.as_deref()))
                .unwrap_or(UNKNOWN_AGENT)
                .to_string(),
            price: present_number(raw.price).unwrap_or(0.0),
            description: description.unwrap_or(NO_DESCRIPTION).to_string(),
        }
    }

    /// Price as shown on the card, e.g. `$1250.00`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn has_long_description(&self) -> bool {
        self.description.chars().count() > DESCRIPTION_PREVIEW_LEN
    }

    /// HTML id of the card. Anything outside `[A-Za-z0-9-]` in the listing id
    /// is written as `_xx` hex so the id is usable as a URL fragment.
    pub fn anchor_id(&self) -> String {
        let mut anchor = String::from("listing-");
        for b in self.id.as_str().bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' {
                anchor.push(char::from(b));
            } else {
                anchor.push_str(&format!("_{b:02x}"));
            }
        }
        anchor
    }

    pub fn detail_href(&self) -> String {
        format!("/property-details-v1/{}", self.id)
    }
}

/// Turns a raw `{ data: { list: [...] } }` payload into card view-models.
///
/// Never fails: a missing or empty `data.list` gives an empty vec, which
/// callers render as "no results".
pub fn normalize(raw: &Value) -> Vec<ListingViewModel> {
    ListingsResponse::from_value(raw)
        .listings()
        .iter()
        .map(ListingViewModel::from_raw)
        .collect()
}

/// Cuts `text` to `max_len` characters and appends `...` when it is longer.
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn present_text(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn present_number(n: Option<f64>) -> Option<f64> {
    n.filter(|n| n.is_finite() && *n != 0.0)
}
