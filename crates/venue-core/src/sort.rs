// crates/venue-core/src/sort.rs

//! # Sort Comparator
//!
//! Orders venues by one of the fixed [`SortStrategy`] values. Sorting is
//! stable: venues with equal keys keep their catalog order.

use crate::model::Venue;
use crate::text::compare_folded;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort selection of the list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    /// Groups by city; there is no ranking score behind it.
    #[default]
    Recommended,
    PriceAscending,
    PriceDescending,
    Name,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::Recommended,
        SortStrategy::PriceAscending,
        SortStrategy::PriceDescending,
        SortStrategy::Name,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortStrategy::Recommended => "recommended",
            SortStrategy::PriceAscending => "price-ascending",
            SortStrategy::PriceDescending => "price-descending",
            SortStrategy::Name => "name",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recommended" | "" => Ok(SortStrategy::Recommended),
            "price-ascending" | "price-asc" | "price_asc" => Ok(SortStrategy::PriceAscending),
            "price-descending" | "price-desc" | "price_desc" => Ok(SortStrategy::PriceDescending),
            "name" => Ok(SortStrategy::Name),
            other => Err(format!("unknown sort strategy: {other}")),
        }
    }
}

/// Compares two venues under `strategy`.
///
/// Venues without a price sort after every priced venue in *both* price
/// directions and compare equal among themselves, so a stable sort keeps
/// them in catalog order at the bottom.
pub fn compare(a: &Venue, b: &Venue, strategy: SortStrategy) -> Ordering {
    match strategy {
        SortStrategy::PriceAscending => compare_price(a, b, |x, y| x.total_cmp(&y)),
        SortStrategy::PriceDescending => compare_price(a, b, |x, y| y.total_cmp(&x)),
        SortStrategy::Name => compare_folded(a.name(), b.name()),
        SortStrategy::Recommended => compare_folded(a.city(), b.city()),
    }
}

fn compare_price(a: &Venue, b: &Venue, priced: impl Fn(f64, f64) -> Ordering) -> Ordering {
    match (a.price_per_hour, b.price_per_hour) {
        (Some(x), Some(y)) => priced(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of a venue list in place.
pub fn sort_venues(venues: &mut [&Venue], strategy: SortStrategy) {
    venues.sort_by(|a, b| compare(a, b, strategy));
}
