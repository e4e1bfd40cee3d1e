// crates/venue-core/src/raw.rs
#![cfg(feature = "json")]

use serde::Deserialize;
use serde_json::Value;

/// Raw venue record as it comes from the catalog JSON.
///
/// Every field that the frontends have historically filled inconsistently
/// is kept as a [`Value`] here and normalized in `model::convert`.
/// We do *not* expose this type from the public API.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRaw {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub city: Value,
    #[serde(default)]
    pub address: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub price_per_hour: Value,
    #[serde(default)]
    pub sports: Value,
    #[serde(default)]
    pub amenities: Value,
    #[serde(default)]
    pub opening_hours: Value,
    #[serde(default)]
    pub external_url: Value,
}

/// Raw `{open, close}` pair of one weekday.
#[derive(Debug, Default, Deserialize)]
pub struct DayHoursRaw {
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
}
