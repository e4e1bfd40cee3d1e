// crates/venue-core/src/model/catalog.rs
use super::venue::Venue;
use crate::error::{Result, VenueError};
use crate::geo::CityCoords;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::warn;

/// The immutable venue catalog.
///
/// Built once by the loader and only read afterwards. Venue ids are unique;
/// [`Catalog::new`] drops later duplicates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    venues: Vec<Venue>,
}

/// Simple aggregate statistics for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub venues: usize,
    pub priced: usize,
    pub cities: usize,
    /// Venues whose city has a coordinate and therefore a map point.
    pub mappable: usize,
}

impl Catalog {
    pub fn new(venues: Vec<Venue>) -> Self {
        let mut seen = HashSet::with_capacity(venues.len());
        let venues = venues
            .into_iter()
            .filter(|v| {
                let fresh = seen.insert(v.id.clone());
                if !fresh {
                    warn!(id = %v.id, name = %v.name, "dropping venue with duplicate id");
                }
                fresh
            })
            .collect();
        Self { venues }
    }

    /// All venues in catalog order.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Detail lookup. An unknown id is [`VenueError::NotFound`].
    pub fn find_by_id(&self, id: &str) -> Result<&Venue> {
        self.venues
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| VenueError::NotFound(format!("venue {id}")))
    }

    /// Every sport offered somewhere in the catalog, sorted.
    pub fn sports(&self) -> Vec<&str> {
        collect_sorted(self.venues.iter().flat_map(|v| v.sports.iter()))
    }

    /// Every amenity offered somewhere in the catalog, sorted.
    pub fn amenities(&self) -> Vec<&str> {
        collect_sorted(self.venues.iter().flat_map(|v| v.amenities.iter()))
    }

    /// Every known city, sorted.
    pub fn cities(&self) -> Vec<&str> {
        collect_sorted(self.venues.iter().filter_map(|v| v.city.as_ref()))
    }

    pub fn stats(&self, coords: &CityCoords) -> CatalogStats {
        CatalogStats {
            venues: self.venues.len(),
            priced: self
                .venues
                .iter()
                .filter(|v| v.price_per_hour.is_some())
                .count(),
            cities: self.cities().len(),
            mappable: self
                .venues
                .iter()
                .filter(|v| v.city.as_deref().is_some_and(|c| coords.get(c).is_some()))
                .count(),
        }
    }
}

fn collect_sorted<'a>(items: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    items
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
