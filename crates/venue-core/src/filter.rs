// crates/venue-core/src/filter.rs

//! # Venue Filter Predicate
//!
//! [`FilterState`] holds the user's criteria; [`matches`] tests one venue
//! against all of them. Categories combine with AND, and multi-valued
//! categories (sports, amenities) are strict: a venue must offer *every*
//! selected value.

use crate::model::{Venue, Weekday};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Session-scoped filter criteria. `Default` is "no filters".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    /// Every listed sport must be offered.
    pub sports: Vec<String>,
    /// Free text matched against `city + " " + address`.
    pub city: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// Venue must be open on this day. An empty string deserializes as `None`.
    #[serde(deserialize_with = "day_or_empty")]
    pub day: Option<Weekday>,
    /// Every listed amenity must be present.
    pub amenities: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active criteria, for "Filters (3)" style badges.
    pub fn active_count(&self) -> usize {
        self.sports.len()
            + self.amenities.len()
            + usize::from(!self.city.trim().is_empty())
            + usize::from(self.price_min.is_some())
            + usize::from(self.price_max.is_some())
            + usize::from(self.day.is_some())
    }

    /// Adds the sport if absent, removes it otherwise.
    pub fn toggle_sport(&mut self, sport: &str) {
        toggle(&mut self.sports, sport);
    }

    /// Adds the amenity if absent, removes it otherwise.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        toggle(&mut self.amenities, amenity);
    }

    /// Builder-style helpers, mostly for tests and CLI argument mapping.
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sports.push(sport.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.push(amenity.into());
        self
    }
}

fn day_or_empty<'de, D>(deserializer: D) -> Result<Option<Weekday>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(day) => day.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

/// Tests one venue against every active criterion.
///
/// Pure and total: missing venue data never panics, it only fails the
/// criteria that need it (a venue without price fails any price bound).
///
/// # Examples
///
/// ```rust
/// use venue_core::filter::{matches, FilterState};
/// use venue_core::model::{OpeningHours, Venue};
///
/// let venue = Venue {
///     id: "v1".into(),
///     name: "Soccerhalle Nord".into(),
///     city: Some("Mannheim".into()),
///     address: Some("Industriestraße 12".into()),
///     description: String::new(),
///     price_per_hour: None,
///     sports: vec!["soccer".into(), "padel".into()],
///     amenities: vec!["parking".into()],
///     opening_hours: OpeningHours::unknown(),
///     external_url: None,
/// };
///
/// assert!(matches(&venue, &FilterState::new()));
/// assert!(matches(&venue, &FilterState::new().with_city("mannh")));
/// assert!(!matches(&venue, &FilterState::new().with_sport("soccer").with_sport("fitness")));
/// assert!(!matches(&venue, &FilterState::new().with_price_range(Some(10.0), None)));
/// ```
pub fn matches(venue: &Venue, filter: &FilterState) -> bool {
    if !filter.sports.iter().all(|s| venue.has_sport(s)) {
        return false;
    }

    let query = filter.city.trim();
    if !query.is_empty() && !fold_key(&venue.location_haystack()).contains(&fold_key(query)) {
        return false;
    }

    if let Some(min) = filter.price_min {
        match venue.price_per_hour {
            Some(p) if p >= min => {}
            _ => return false,
        }
    }

    if let Some(max) = filter.price_max {
        match venue.price_per_hour {
            Some(p) if p <= max => {}
            _ => return false,
        }
    }

    if let Some(day) = filter.day {
        if !venue.opening_hours.is_open_on(day) {
            return false;
        }
    }

    filter.amenities.iter().all(|a| venue.has_amenity(a))
}

/// Filters a venue slice, preserving catalog order.
pub fn filter_venues<'a>(venues: &'a [Venue], filter: &FilterState) -> Vec<&'a Venue> {
    venues.iter().filter(|v| matches(v, filter)).collect()
}
