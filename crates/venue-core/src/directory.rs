// crates/venue-core/src/directory.rs

//! # Filter/Sort Orchestrator
//!
//! [`Directory`] is one browsing session over a [`Catalog`]. It owns the
//! filter state, the sort selection, the pagination cursor and the map
//! selection, and derives everything else on demand:
//!
//! ```text
//! catalog ─ matches ─▶ filtered ─ compare ─▶ sorted ─ take(cursor) ─▶ visible
//!                          └─ (or catalog if empty) ─ project ─▶ map points
//! marker click ─▶ focus city ─▶ set_filters(city) ─▶ re-filter, pan camera
//! ```
//!
//! All mutation goes through the transition methods; nothing is cached, so
//! a derivation always reflects the current state.

use crate::config::DirectoryConfig;
use crate::error::Result;
use crate::filter::{filter_venues, FilterState};
use crate::geo::{project_all, CityCoords, VenuePoint};
use crate::map::{map_input, MapSync};
use crate::model::{Catalog, Venue};
use crate::sort::{sort_venues, SortStrategy};
use tracing::debug;

pub struct Directory<'a> {
    catalog: &'a Catalog,
    coords: &'a CityCoords,
    config: DirectoryConfig,
    filters: FilterState,
    sort: SortStrategy,
    visible_count: usize,
    map: MapSync,
}

impl<'a> Directory<'a> {
    /// Starts a session with no filters, `recommended` order and one page.
    ///
    /// ```rust
    /// use venue_core::prelude::*;
    ///
    /// let catalog = Catalog::from_json_str(r#"[
    ///     { "id": "a", "name": "Arena", "city": "Mannheim", "sports": ["soccer"] },
    ///     { "id": "b", "name": "Box", "city": "Heidelberg", "sports": ["fitness"] }
    /// ]"#)?;
    /// let mut dir = Directory::new(&catalog, CityCoords::bundled(), DirectoryConfig::default());
    /// assert_eq!(dir.visible().len(), 2);
    ///
    /// dir.select_marker("a")?;
    /// assert_eq!(dir.filters().city, "Mannheim");
    /// assert_eq!(dir.visible().len(), 1);
    /// # Ok::<(), venue_core::VenueError>(())
    /// ```
    pub fn new(catalog: &'a Catalog, coords: &'a CityCoords, config: DirectoryConfig) -> Self {
        let map = MapSync::new(&config.map);
        Self {
            catalog,
            coords,
            visible_count: config.page_size,
            config,
            filters: FilterState::default(),
            sort: SortStrategy::default(),
            map,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn coords(&self) -> &'a CityCoords {
        self.coords
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortStrategy {
        self.sort
    }

    /// The pagination cursor.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn map(&self) -> &MapSync {
        &self.map
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    /// Replaces the filter state wholesale and resets pagination. A changed
    /// city text is a new focus city for the map.
    pub fn set_filters(&mut self, filters: FilterState) {
        let focus_changed = filters.city.trim() != self.filters.city.trim();
        self.filters = filters;
        self.visible_count = self.config.page_size;

        if focus_changed {
            let candidates = self.map_input();
            self.map
                .focus_city(&self.filters.city, self.coords, &candidates);
        }
        debug!(
            active = self.filters.active_count(),
            results = self.result_count(),
            "filters changed"
        );
    }

    /// Field-level edit; goes through [`Directory::set_filters`].
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut FilterState)) {
        let mut next = self.filters.clone();
        edit(&mut next);
        self.set_filters(next);
    }

    /// The city setter used by the map feedback loop.
    pub fn set_city(&mut self, city: &str) {
        self.update_filters(|f| f.city = city.to_string());
    }

    /// Changes the sort order. Pagination resets only when
    /// [`DirectoryConfig::reset_page_on_sort`] is set.
    pub fn set_sort(&mut self, sort: SortStrategy) {
        self.sort = sort;
        if self.config.reset_page_on_sort {
            self.visible_count = self.config.page_size;
        }
        debug!(%sort, "sort changed");
    }

    /// Back to the initial session: no filters, `recommended`, one page,
    /// no map focus.
    pub fn reset(&mut self) {
        self.filters = FilterState::default();
        self.sort = SortStrategy::default();
        self.visible_count = self.config.page_size;
        self.map.reset();
        debug!("directory reset");
    }

    /// Reveals one more page. Returns `false` (and does nothing) once every
    /// result is already visible.
    pub fn load_more(&mut self) -> bool {
        if self.visible_count >= self.result_count() {
            return false;
        }
        self.visible_count += self.config.page_size;
        true
    }

    /// Marker click: selects the venue and, if it has a city, makes that
    /// city the new text filter.
    pub fn select_marker(&mut self, venue_id: &str) -> Result<()> {
        let venue = self.catalog.find_by_id(venue_id)?;
        if let Some(city) = venue.city.as_deref() {
            self.set_city(city);
        }
        self.map.select(&venue.id);
        debug!(id = venue_id, "marker selected");
        Ok(())
    }

    /// Clears the selected venue and the focus city it propagated.
    pub fn clear_selection(&mut self) {
        self.map.clear_selection();
        self.set_city("");
    }

    // ---------------------------------------------------------------------
    // Derivations
    // ---------------------------------------------------------------------

    /// Venues passing the filter, in catalog order.
    pub fn filtered(&self) -> Vec<&'a Venue> {
        filter_venues(self.catalog.venues(), &self.filters)
    }

    pub fn result_count(&self) -> usize {
        self.catalog
            .venues()
            .iter()
            .filter(|v| crate::filter::matches(v, &self.filters))
            .count()
    }

    /// Filtered venues in the selected order (stable).
    pub fn sorted(&self) -> Vec<&'a Venue> {
        let mut list = self.filtered();
        sort_venues(&mut list, self.sort);
        list
    }

    /// The first `visible_count` sorted venues.
    pub fn visible(&self) -> Vec<&'a Venue> {
        let mut list = self.sorted();
        list.truncate(self.visible_count);
        list
    }

    pub fn has_more(&self) -> bool {
        self.visible_count < self.result_count()
    }

    /// Venues shown on the map (see [`map_input`]).
    pub fn map_input(&self) -> Vec<&'a Venue> {
        map_input(self.catalog.venues(), &self.filtered())
    }

    pub fn map_points(&self) -> Vec<VenuePoint<'a>> {
        project_all(self.map_input(), self.coords)
    }

    pub fn selected(&self) -> Option<&'a Venue> {
        self.catalog.find_by_id(self.map.selected_id()?).ok()
    }

    /// Detail lookup by id.
    pub fn venue(&self, id: &str) -> Result<&'a Venue> {
        self.catalog.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OpeningHours, Weekday};

    fn venue(id: &str, city: &str, price: Option<f64>) -> Venue {
        Venue {
            id: id.into(),
            name: format!("Venue {id}"),
            city: Some(city.into()),
            address: None,
            description: String::new(),
            price_per_hour: price,
            sports: vec!["soccer".into()],
            amenities: vec![],
            opening_hours: OpeningHours::unknown(),
            external_url: None,
        }
    }

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| {
                    let city = if i % 2 == 0 { "Mannheim" } else { "Heidelberg" };
                    venue(&format!("v{i}"), city, Some(10.0 * i as f64))
                })
                .collect(),
        )
    }

    fn config(page_size: usize) -> DirectoryConfig {
        DirectoryConfig {
            page_size,
            ..DirectoryConfig::default()
        }
    }

    #[test]
    fn load_more_grows_by_page_and_stops_at_the_end() {
        let cat = catalog(5);
        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        assert_eq!(dir.visible().len(), 2);
        assert!(dir.has_more());
        assert!(dir.load_more());
        assert_eq!(dir.visible().len(), 4);
        assert!(dir.load_more());
        assert_eq!(dir.visible().len(), 5);
        assert!(!dir.has_more());
        assert!(!dir.load_more());
        assert_eq!(dir.visible_count(), 6);
    }

    #[test]
    fn filter_change_resets_cursor() {
        let cat = catalog(8);
        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        dir.load_more();
        dir.load_more();
        assert_eq!(dir.visible().len(), 6);
        dir.set_filters(FilterState::new().with_city("Heidelberg"));
        assert_eq!(dir.visible_count(), 2);
        assert_eq!(dir.visible().len(), 2);
    }

    #[test]
    fn sort_change_reset_is_configurable() {
        let cat = catalog(8);
        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        dir.load_more();
        dir.set_sort(SortStrategy::PriceDescending);
        assert_eq!(dir.visible_count(), 2);

        let keep = DirectoryConfig {
            reset_page_on_sort: false,
            ..config(2)
        };
        let mut dir = Directory::new(&cat, CityCoords::bundled(), keep);
        dir.load_more();
        dir.set_sort(SortStrategy::PriceDescending);
        assert_eq!(dir.visible_count(), 4);
        assert_eq!(dir.visible()[0].id, "v7");
    }

    #[test]
    fn reset_restores_initial_session() {
        let cat = catalog(4);
        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        dir.select_marker("v1").unwrap();
        dir.set_sort(SortStrategy::Name);
        dir.update_filters(|f| f.day = Some(Weekday::Monday));
        dir.load_more();

        dir.reset();
        assert!(dir.filters().is_empty());
        assert_eq!(dir.sort(), SortStrategy::Recommended);
        assert_eq!(dir.visible_count(), 2);
        assert!(dir.selected().is_none());
        assert_eq!(dir.map().camera().zoom, 6.0);
    }

    #[test]
    fn clear_selection_clears_focus_city() {
        let cat = catalog(4);
        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        dir.select_marker("v2").unwrap();
        assert_eq!(dir.selected().map(|v| v.id.as_str()), Some("v2"));
        assert_eq!(dir.filters().city, "Mannheim");

        dir.clear_selection();
        assert!(dir.selected().is_none());
        assert_eq!(dir.filters().city, "");
        assert_eq!(dir.result_count(), 4);
    }

    #[test]
    fn marker_without_city_keeps_city_filter() {
        let mut venues: Vec<Venue> = catalog(2).venues().to_vec();
        let mut nowhere = venue("nowhere", "", None);
        nowhere.city = None;
        venues.push(nowhere);
        let cat = Catalog::new(venues);

        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        dir.set_filters(FilterState::new().with_city("nowhere"));
        dir.select_marker("nowhere").unwrap();
        assert_eq!(dir.selected().map(|v| v.id.as_str()), Some("nowhere"));
        assert_eq!(dir.filters().city, "nowhere");
        assert_eq!(dir.visible_count(), 2);

        dir.set_filters(FilterState::new());
        dir.select_marker("nowhere").unwrap();
        assert_eq!(dir.filters().city, "");
        assert_eq!(dir.result_count(), 3);
    }

    #[test]
    fn unknown_marker_is_not_found() {
        let cat = catalog(2);
        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        assert!(matches!(
            dir.select_marker("nope"),
            Err(crate::VenueError::NotFound(_))
        ));
        assert!(dir.filters().is_empty());
    }

    #[test]
    fn typing_a_city_selects_a_matching_venue() {
        let cat = catalog(4);
        let mut dir = Directory::new(&cat, CityCoords::bundled(), config(2));
        dir.set_city("Heidelberg");
        assert_eq!(dir.selected().map(|v| v.id.as_str()), Some("v1"));
        assert_eq!(
            dir.map().camera().center,
            CityCoords::bundled().get("Heidelberg").unwrap()
        );
    }
}
