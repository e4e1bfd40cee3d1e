// crates/venue-core/src/geo.rs

//! # Geocode Projector
//!
//! Maps a venue's city to a base coordinate and adds a small, deterministic
//! per-venue offset so that several venues in one city render as distinct,
//! stable map points. No network geocoding: a city missing from the
//! [`CityCoords`] table simply has no point.

use crate::model::Venue;
use crate::text::fold_key;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Half-width of the latitude jitter band in degrees.
pub const LAT_JITTER: f64 = 0.04;
/// Half-width of the longitude jitter band in degrees.
pub const LNG_JITTER: f64 = 0.06;

/// A WGS84 coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A venue paired with its projected map position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VenuePoint<'a> {
    pub venue: &'a Venue,
    pub position: LatLng,
}

/// Static city → coordinate table.
///
/// Keys match exactly, so regional spellings ("Frankfurt" and
/// "Frankfurt am Main") are separate entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityCoords {
    cities: HashMap<String, LatLng>,
}

static DEFAULT_COORDS: Lazy<CityCoords> = Lazy::new(|| {
    CityCoords::from_pairs([
        ("Mannheim", LatLng::new(49.4875, 8.4660)),
        ("Heidelberg", LatLng::new(49.3988, 8.6724)),
        ("Ludwigshafen", LatLng::new(49.4774, 8.4452)),
        ("Ludwigshafen am Rhein", LatLng::new(49.4774, 8.4452)),
        ("Weinheim", LatLng::new(49.5450, 8.6603)),
        ("Schwetzingen", LatLng::new(49.3833, 8.5667)),
        ("Viernheim", LatLng::new(49.5400, 8.5780)),
        ("Speyer", LatLng::new(49.3173, 8.4412)),
        ("Worms", LatLng::new(49.6341, 8.3507)),
        ("Karlsruhe", LatLng::new(49.0069, 8.4037)),
        ("Darmstadt", LatLng::new(49.8728, 8.6512)),
        ("Frankfurt", LatLng::new(50.1109, 8.6821)),
        ("Frankfurt am Main", LatLng::new(50.1109, 8.6821)),
        ("Mainz", LatLng::new(49.9929, 8.2473)),
        ("Wiesbaden", LatLng::new(50.0782, 8.2398)),
        ("Stuttgart", LatLng::new(48.7758, 9.1829)),
        ("München", LatLng::new(48.1351, 11.5820)),
        ("Munich", LatLng::new(48.1351, 11.5820)),
        ("Köln", LatLng::new(50.9375, 6.9603)),
        ("Cologne", LatLng::new(50.9375, 6.9603)),
        ("Berlin", LatLng::new(52.5200, 13.4050)),
        ("Hamburg", LatLng::new(53.5511, 9.9937)),
    ])
});

impl CityCoords {
    /// The bundled table covering the cities of the bundled catalog.
    pub fn bundled() -> &'static CityCoords {
        &DEFAULT_COORDS
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, LatLng)>) -> Self {
        Self {
            cities: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, city: &str) -> Option<LatLng> {
        self.cities.get(city).copied()
    }

    /// Folded lookup for free text (e.g. a focus city typed by the user).
    /// Prefers the exact key.
    pub fn find_folded(&self, text: &str) -> Option<LatLng> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.get(text).or_else(|| {
            let q = fold_key(text);
            self.cities
                .iter()
                .find(|(name, _)| fold_key(name) == q)
                .map(|(_, pos)| *pos)
        })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Polynomial rolling hash over the UTF-16 code units of `key`
/// (`hash = hash * 31 + unit`, wrapping in signed 32-bit).
///
/// ```rust
/// use venue_core::geo::stable_hash;
///
/// assert_eq!(stable_hash(""), 0);
/// assert_eq!(stable_hash("a"), 97);
/// assert_eq!(stable_hash("ab"), 97 * 31 + 98);
/// ```
pub fn stable_hash(key: &str) -> i32 {
    key.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Derives the `(lat, lng)` offset for a hash.
///
/// Works on the absolute value so both offsets stay inside
/// `±LAT_JITTER` / `±LNG_JITTER`.
pub fn jitter(hash: i32) -> (f64, f64) {
    let h = (hash as i64).abs();
    let lat = ((h % 1000) as f64 / 1000.0 - 0.5) * (LAT_JITTER * 2.0);
    let lng = (((h / 1000) % 1000) as f64 / 1000.0 - 0.5) * (LNG_JITTER * 2.0);
    (lat, lng)
}

/// Projects one venue. `None` when the city is missing or has no coordinate.
///
/// A pure function of `(city, id)`: projecting an unchanged venue again
/// yields the identical point.
pub fn project<'a>(venue: &'a Venue, coords: &CityCoords) -> Option<VenuePoint<'a>> {
    let base = coords.get(venue.city.as_deref()?)?;
    let (dlat, dlng) = jitter(stable_hash(&venue.id));
    Some(VenuePoint {
        venue,
        position: LatLng::new(base.lat + dlat, base.lng + dlng),
    })
}

/// Projects a collection, omitting venues without a coordinate.
pub fn project_all<'a, I>(venues: I, coords: &CityCoords) -> Vec<VenuePoint<'a>>
where
    I: IntoIterator<Item = &'a Venue>,
{
    venues
        .into_iter()
        .filter_map(|v| project(v, coords))
        .collect()
}
