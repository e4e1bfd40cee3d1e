// crates/venue-core/src/map/sync.rs
use crate::config::MapConfig;
use crate::geo::{CityCoords, LatLng};
use crate::model::Venue;
use crate::text::equals_folded;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Center and zoom of the map view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapCamera {
    pub center: LatLng,
    pub zoom: f64,
}

/// Venues to put on the map: the filtered set, or the whole catalog when
/// the filter leaves nothing, so the map is never blank.
pub fn map_input<'a>(catalog: &'a [Venue], filtered: &[&'a Venue]) -> Vec<&'a Venue> {
    if filtered.is_empty() {
        catalog.iter().collect()
    } else {
        filtered.to_vec()
    }
}

/// Selection and camera state of the map view.
///
/// The list/map feedback loop itself (marker click → city filter) lives in
/// [`crate::Directory`], which owns both this and the filter state.
#[derive(Clone, Debug, PartialEq)]
pub struct MapSync {
    selected: Option<String>,
    camera: MapCamera,
    home: MapCamera,
    min_focus_zoom: f64,
}

impl MapSync {
    pub fn new(config: &MapConfig) -> Self {
        let home = MapCamera {
            center: config.default_center,
            zoom: config.default_zoom,
        };
        Self {
            selected: None,
            camera: home,
            home,
            min_focus_zoom: config.min_focus_zoom,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn camera(&self) -> MapCamera {
        self.camera
    }

    pub fn select(&mut self, venue_id: &str) {
        self.selected = Some(venue_id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Reacts to a new focus city.
    ///
    /// Pans to the city's base coordinate (if known) and raises the zoom to
    /// at least the focus minimum. The selection only moves when the current
    /// one is not in that city and `candidates` holds a venue that is.
    pub fn focus_city(&mut self, city: &str, coords: &CityCoords, candidates: &[&Venue]) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }

        if let Some(center) = coords.find_folded(city) {
            self.camera = MapCamera {
                center,
                zoom: self.camera.zoom.max(self.min_focus_zoom),
            };
            debug!(city, zoom = self.camera.zoom, "map focused city");
        }

        let mut in_city = candidates.iter().copied().filter(|v| is_in_city(v, city));
        let selection_in_city = match self.selected.as_deref() {
            Some(id) => candidates
                .iter()
                .any(|v| v.id == id && is_in_city(v, city)),
            None => false,
        };
        if !selection_in_city {
            if let Some(v) = in_city.next() {
                self.selected = Some(v.id.clone());
            }
        }
    }

    /// Back to the initial camera with nothing selected.
    pub fn reset(&mut self) {
        self.selected = None;
        self.camera = self.home;
    }
}

fn is_in_city(venue: &Venue, city: &str) -> bool {
    venue.city.as_deref().is_some_and(|c| equals_folded(c, city))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpeningHours;

    fn venue(id: &str, city: &str) -> Venue {
        Venue {
            id: id.into(),
            name: id.into(),
            city: Some(city.into()),
            address: None,
            description: String::new(),
            price_per_hour: None,
            sports: vec![],
            amenities: vec![],
            opening_hours: OpeningHours::unknown(),
            external_url: None,
        }
    }

    #[test]
    fn empty_filter_result_falls_back_to_catalog() {
        let catalog = vec![venue("a", "Mannheim"), venue("b", "Heidelberg")];
        assert_eq!(map_input(&catalog, &[]).len(), 2);
        assert_eq!(map_input(&catalog, &[&catalog[1]]).len(), 1);
    }

    #[test]
    fn focus_pans_and_raises_zoom_only_upwards() {
        let coords = CityCoords::bundled();
        let mut sync = MapSync::new(&MapConfig::default());
        sync.focus_city("heidelberg", coords, &[]);
        let cam = sync.camera();
        assert_eq!(cam.center, coords.get("Heidelberg").unwrap());
        assert_eq!(cam.zoom, 12.0);

        sync.camera.zoom = 15.0;
        sync.focus_city("Mannheim", coords, &[]);
        assert_eq!(sync.camera().zoom, 15.0);
        assert_eq!(sync.camera().center, coords.get("Mannheim").unwrap());
    }

    #[test]
    fn unknown_focus_city_keeps_camera() {
        let mut sync = MapSync::new(&MapConfig::default());
        let before = sync.camera();
        sync.focus_city("Atlantis", CityCoords::bundled(), &[]);
        assert_eq!(sync.camera(), before);
    }

    #[test]
    fn focus_selects_matching_venue_but_keeps_valid_selection() {
        let a = venue("a", "Mannheim");
        let b = venue("b", "Mannheim");
        let c = venue("c", "Heidelberg");
        let candidates = [&a, &b, &c];
        let coords = CityCoords::bundled();
        let mut sync = MapSync::new(&MapConfig::default());

        sync.focus_city("Mannheim", coords, &candidates);
        assert_eq!(sync.selected_id(), Some("a"));

        sync.select("b");
        sync.focus_city("mannheim", coords, &candidates);
        assert_eq!(sync.selected_id(), Some("b"));

        sync.focus_city("Speyer", coords, &candidates);
        assert_eq!(sync.selected_id(), Some("b"));
    }
}
