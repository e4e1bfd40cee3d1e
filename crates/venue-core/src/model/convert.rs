// crates/venue-core/src/model/convert.rs
use super::venue::{DayHours, OpeningHours, Venue, Weekday};
use crate::raw::{DayHoursRaw, VenueRaw};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

/// Converts the top-level catalog array into venues.
///
/// Records that are not JSON objects are skipped; everything else is
/// sanitized field by field so one bad record never fails the whole load.
/// Records without an id get a fallback id that no other record uses.
pub fn venues_from_values(values: Vec<Value>) -> Vec<Venue> {
    let raws: Vec<(usize, VenueRaw)> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            if !value.is_object() {
                warn!(index, "skipping catalog entry that is not an object");
                return None;
            }
            match serde_json::from_value::<VenueRaw>(value) {
                Ok(raw) => Some((index, raw)),
                Err(e) => {
                    warn!(index, error = %e, "skipping unreadable catalog entry");
                    None
                }
            }
        })
        .collect();

    let mut taken: HashSet<String> = raws
        .iter()
        .filter_map(|(_, raw)| explicit_id(&raw.id))
        .collect();

    raws.into_iter()
        .map(|(index, raw)| {
            let id = match explicit_id(&raw.id) {
                Some(id) => id,
                None => fallback_id(index, &mut taken),
            };
            venue_from_raw(id, raw)
        })
        .collect()
}

/// A usable id from the record itself: a non-blank string or a number.
fn explicit_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The catalog index, suffixed with `-1`, `-2`, ... while that string is
/// already some record's id.
fn fallback_id(index: usize, taken: &mut HashSet<String>) -> String {
    let mut id = index.to_string();
    let mut n = 0;
    while taken.contains(&id) {
        n += 1;
        id = format!("{index}-{n}");
    }
    warn!(index, %id, "catalog entry has no id, using a fallback");
    taken.insert(id.clone());
    id
}

/// Normalizes one raw record under the already resolved `id`.
pub fn venue_from_raw(id: String, raw: VenueRaw) -> Venue {
    Venue {
        name: text(&id, "name", raw.name).unwrap_or_default(),
        city: non_empty(text(&id, "city", raw.city)),
        address: non_empty(text(&id, "address", raw.address)),
        description: text(&id, "description", raw.description).unwrap_or_default(),
        price_per_hour: parse_price(&id, &raw.price_per_hour),
        sports: string_list(&id, "sports", raw.sports),
        amenities: string_list(&id, "amenities", raw.amenities),
        opening_hours: opening_hours(&id, raw.opening_hours),
        external_url: non_empty(text(&id, "externalUrl", raw.external_url)),
        id,
    }
}

/// A string field; any other JSON type is treated as absent.
fn text(id: &str, field: &str, value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => {
            warn!(id, field, raw = %other, "expected a string, ignoring the field");
            None
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Accepts a non-negative number or a numeric string; anything else is
/// "price on request".
fn parse_price(id: &str, value: &Value) -> Option<f64> {
    let price = match value {
        Value::Null => return None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match price {
        Some(p) if p.is_finite() && p >= 0.0 => Some(p),
        _ => {
            warn!(id, raw = %value, "price is not a non-negative number, treating as on request");
            None
        }
    }
}

/// Keeps string items in order, drops duplicates and non-strings.
fn string_list(id: &str, field: &str, value: Value) -> Vec<String> {
    let items = match value {
        Value::Null => return Vec::new(),
        Value::Array(items) => items,
        other => {
            warn!(id, field, raw = %other, "expected a list, using an empty one");
            return Vec::new();
        }
    };

    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => {
                let s = s.trim();
                if !s.is_empty() && !out.iter().any(|x| x == s) {
                    out.push(s.to_string());
                }
            }
            other => warn!(id, field, raw = %other, "dropping non-string list item"),
        }
    }
    out
}

fn opening_hours(id: &str, value: Value) -> OpeningHours {
    let table = match value {
        Value::Null => return OpeningHours::unknown(),
        Value::Object(table) => table,
        other => {
            warn!(id, raw = %other, "openingHours is not an object, treating as unknown");
            return OpeningHours::unknown();
        }
    };

    let days = table.into_iter().filter_map(|(key, hours)| {
        let day = match key.parse::<Weekday>() {
            Ok(day) => day,
            Err(_) => {
                warn!(id, key = %key, "ignoring unknown weekday in openingHours");
                return None;
            }
        };
        let hours = match hours {
            Value::Null => DayHours::Closed,
            other => match serde_json::from_value::<DayHoursRaw>(other) {
                Ok(raw) => DayHours::from_times(
                    raw.open.as_deref().unwrap_or(""),
                    raw.close.as_deref().unwrap_or(""),
                ),
                Err(_) => DayHours::Closed,
            },
        };
        Some((day, hours))
    });

    OpeningHours::from_days(days)
}
