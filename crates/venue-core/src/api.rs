// crates/venue-core/src/api.rs

//! Serializable views for the client bindings (JSON / JS objects).
//!
//! The model types stay free of presentation concerns; these borrow from
//! them and add the derived display fields clients need.

use crate::geo::VenuePoint;
use crate::map::{MapCamera, ScatterDot};
use crate::model::{Catalog, DayHours, Venue, Weekday};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub city: Option<&'a str>,
    pub address: Option<&'a str>,
    pub location: String,
    pub description: &'a str,
    pub price_per_hour: Option<f64>,
    pub price_label: String,
    pub sports: &'a [String],
    pub amenities: &'a [String],
    pub opening_hours: Vec<DayView>,
    pub external_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: Weekday,
    /// `"open"`, `"closed"` or `"unknown"`.
    pub status: &'static str,
    pub label: String,
}

impl<'a> From<&'a Venue> for VenueView<'a> {
    fn from(v: &'a Venue) -> Self {
        VenueView {
            id: &v.id,
            name: &v.name,
            city: v.city.as_deref(),
            address: v.address.as_deref(),
            location: v.location_label(),
            description: &v.description,
            price_per_hour: v.price_per_hour,
            price_label: v.price_label(),
            sports: &v.sports,
            amenities: &v.amenities,
            opening_hours: v
                .opening_hours
                .iter()
                .map(|(day, hours)| DayView {
                    day,
                    status: match hours {
                        DayHours::Open { .. } => "open",
                        DayHours::Closed => "closed",
                        DayHours::Unknown => "unknown",
                    },
                    label: hours.label(),
                })
                .collect(),
            external_url: v.external_url.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PointView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub selected: bool,
}

impl<'a> PointView<'a> {
    pub fn new(point: &VenuePoint<'a>, selected: Option<&str>) -> Self {
        PointView {
            id: &point.venue.id,
            name: &point.venue.name,
            lat: point.position.lat,
            lng: point.position.lng,
            selected: selected == Some(point.venue.id.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DotView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub x: f64,
    pub y: f64,
    pub selected: bool,
}

impl<'a> DotView<'a> {
    pub fn new(dot: &ScatterDot<'a>, selected: Option<&str>) -> Self {
        DotView {
            id: &dot.venue.id,
            name: &dot.venue.name,
            x: dot.x,
            y: dot.y,
            selected: selected == Some(dot.venue.id.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CameraView {
    pub lat: f64,
    pub lng: f64,
    pub zoom: f64,
}

impl From<MapCamera> for CameraView {
    fn from(c: MapCamera) -> Self {
        CameraView {
            lat: c.center.lat,
            lng: c.center.lng,
            zoom: c.zoom,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FacetsView<'a> {
    pub sports: Vec<&'a str>,
    pub amenities: Vec<&'a str>,
    pub cities: Vec<&'a str>,
}

impl<'a> From<&'a Catalog> for FacetsView<'a> {
    fn from(c: &'a Catalog) -> Self {
        FacetsView {
            sports: c.sports(),
            amenities: c.amenities(),
            cities: c.cities(),
        }
    }
}
