// crates/venue-core/tests/scenarios.rs
use std::collections::HashSet;
use venue_core::geo::{project, stable_hash};
use venue_core::prelude::*;

fn session(catalog: &Catalog) -> Directory<'_> {
    Directory::new(catalog, CityCoords::bundled(), DirectoryConfig::default())
}

fn ids(list: &[&Venue]) -> Vec<String> {
    list.iter().map(|v| v.id.clone()).collect()
}

#[test]
fn price_floor_keeps_only_priced_venues_above_it() {
    let catalog = Catalog::from_json_str(
        r#"[
            { "id": "cheap", "name": "Cheap", "pricePerHour": 50 },
            { "id": "ask", "name": "On request" },
            { "id": "pricey", "name": "Pricey", "pricePerHour": 80 }
        ]"#,
    )
    .unwrap();
    let mut dir = session(&catalog);
    dir.set_filters(FilterState::new().with_price_range(Some(60.0), None));
    assert_eq!(ids(&dir.filtered()), ["pricey"]);
}

#[test]
fn day_with_empty_hours_counts_as_closed() {
    let catalog = Catalog::from_json_str(
        r#"[
            { "id": "closed-sunday", "name": "A",
              "openingHours": { "sunday": { "open": "", "close": "" },
                                "monday": { "open": "08:00", "close": "22:00" } } },
            { "id": "open-sunday", "name": "B",
              "openingHours": { "sunday": { "open": "10:00", "close": "18:00" } } }
        ]"#,
    )
    .unwrap();
    let mut dir = session(&catalog);
    dir.set_filters(FilterState::new().with_day(Weekday::Sunday));
    assert_eq!(ids(&dir.filtered()), ["open-sunday"]);
}

#[test]
fn empty_result_still_maps_the_whole_catalog() {
    let catalog = Catalog::load().unwrap();
    let mut dir = session(catalog);
    dir.set_filters(FilterState::new().with_city("no such place"));
    assert!(dir.filtered().is_empty());

    let expected = project_all(catalog.venues(), CityCoords::bundled()).len();
    assert!(expected > 0);
    assert_eq!(dir.map_points().len(), expected);
}

#[test]
fn marker_click_narrows_list_to_its_city() {
    let catalog = Catalog::load().unwrap();
    let mut dir = session(catalog);
    let mannheim = catalog
        .venues()
        .iter()
        .find(|v| v.city.as_deref() == Some("Mannheim"))
        .unwrap();

    dir.select_marker(&mannheim.id).unwrap();

    assert_eq!(dir.filters().city, "Mannheim");
    assert_eq!(dir.selected().map(|v| v.id.as_str()), Some(mannheim.id.as_str()));
    let filtered = dir.filtered();
    assert!(!filtered.is_empty());
    assert!(filtered.len() < catalog.len());
    assert!(filtered
        .iter()
        .all(|v| v.location_haystack().to_lowercase().contains("mannheim")));
    assert_eq!(
        dir.map().camera().center,
        CityCoords::bundled().get("Mannheim").unwrap()
    );
}

#[test]
fn empty_sport_selection_never_excludes() {
    let catalog = Catalog::load().unwrap();
    let filters = [
        FilterState::new(),
        FilterState::new().with_city("heidelberg"),
        FilterState::new().with_price_range(None, Some(50.0)),
        FilterState::new().with_amenity("parking"),
    ];
    for filter in filters {
        let mut without_sport_rule = filter.clone();
        without_sport_rule.sports.clear();
        for v in catalog.venues() {
            assert_eq!(matches(v, &filter), matches(v, &without_sport_rule));
        }
    }
}

#[test]
fn unpriced_venue_is_excluded_by_either_bound_alone() {
    let catalog = Catalog::from_json_str(r#"[{ "id": "ask", "name": "On request" }]"#).unwrap();
    let v = &catalog.venues()[0];
    assert!(v.price_per_hour.is_none());
    assert!(!matches(v, &FilterState::new().with_price_range(Some(0.0), None)));
    assert!(!matches(v, &FilterState::new().with_price_range(None, Some(1e9))));
    assert!(matches(v, &FilterState::new()));
}

#[test]
fn descending_price_is_not_reversed_ascending() {
    let catalog = Catalog::from_json_str(
        r#"[
            { "id": "ask-1", "name": "A" },
            { "id": "p50", "name": "B", "pricePerHour": 50 },
            { "id": "ask-2", "name": "C" },
            { "id": "p80", "name": "D", "pricePerHour": 80 }
        ]"#,
    )
    .unwrap();
    let mut dir = session(&catalog);

    dir.set_sort(SortStrategy::PriceAscending);
    let asc = ids(&dir.sorted());
    assert_eq!(asc, ["p50", "p80", "ask-1", "ask-2"]);

    dir.set_sort(SortStrategy::PriceDescending);
    let desc = ids(&dir.sorted());
    assert_eq!(desc, ["p80", "p50", "ask-1", "ask-2"]);

    let reversed: Vec<String> = asc.into_iter().rev().collect();
    assert_ne!(reversed, desc);
}

#[test]
fn name_sort_keeps_catalog_order_for_equal_names() {
    let catalog = Catalog::from_json_str(
        r#"[
            { "id": "z", "name": "Zentrum" },
            { "id": "dup-1", "name": "Halle" },
            { "id": "a", "name": "Arena" },
            { "id": "dup-2", "name": "Halle" }
        ]"#,
    )
    .unwrap();
    let mut dir = session(&catalog);
    dir.set_sort(SortStrategy::Name);
    assert_eq!(ids(&dir.sorted()), ["a", "dup-1", "dup-2", "z"]);
}

#[test]
fn narrowing_filter_shows_fresh_page_not_stale_cursor() {
    let catalog = Catalog::load().unwrap();
    let config = DirectoryConfig {
        page_size: 2,
        ..DirectoryConfig::default()
    };
    let mut dir = Directory::new(catalog, CityCoords::bundled(), config);
    while dir.load_more() {}
    assert_eq!(dir.visible().len(), catalog.len());

    dir.set_filters(FilterState::new().with_sport("padel"));
    let filtered = dir.filtered().len();
    assert!(filtered > 2);
    assert_eq!(dir.visible().len(), 2.min(filtered));

    dir.set_filters(FilterState::new().with_city("Schwetzingen"));
    assert_eq!(dir.visible().len(), 1);
}

#[test]
fn projection_is_bit_identical_across_calls() {
    let catalog = Catalog::load().unwrap();
    for v in catalog.venues() {
        let a = project(v, CityCoords::bundled()).map(|p| p.position);
        let b = project(v, CityCoords::bundled()).map(|p| p.position);
        assert_eq!(
            a.map(|p| (p.lat.to_bits(), p.lng.to_bits())),
            b.map(|p| (p.lat.to_bits(), p.lng.to_bits()))
        );
    }
}

#[test]
fn colocated_venues_rarely_collide() {
    let mut names: Vec<String> = Catalog::load()
        .unwrap()
        .venues()
        .iter()
        .map(|v| v.id.clone())
        .collect();
    names.extend((0..150).map(|i| format!("venue-{i}")));
    names.extend((0..50).map(|i| format!("padel-court-mannheim-{i:03}")));

    let positions: Vec<(i64, i64)> = names
        .iter()
        .map(|id| {
            let h = (stable_hash(id) as i64).abs();
            (h % 1000, (h / 1000) % 1000)
        })
        .collect();

    let mut pairs = 0usize;
    let mut collisions = 0usize;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            pairs += 1;
            if positions[i] == positions[j] {
                collisions += 1;
            }
        }
    }
    assert!(collisions * 20 <= pairs, "{collisions} of {pairs} pairs collide");

    let distinct: HashSet<(i64, i64)> = positions.iter().copied().collect();
    assert!(distinct.len() * 100 >= positions.len() * 95);
}

#[test]
fn projected_venues_in_one_city_stay_apart() {
    let venues: Vec<Venue> = (0..200)
        .map(|i| Venue {
            id: format!("mannheim-venue-{i}"),
            name: format!("Hall {i}"),
            city: Some("Mannheim".into()),
            address: None,
            description: String::new(),
            price_per_hour: None,
            sports: vec![],
            amenities: vec![],
            opening_hours: OpeningHours::unknown(),
            external_url: None,
        })
        .collect();

    let positions: Vec<(u64, u64)> = venues
        .iter()
        .filter_map(|v| project(v, CityCoords::bundled()))
        .map(|p| (p.position.lat.to_bits(), p.position.lng.to_bits()))
        .collect();
    assert_eq!(positions.len(), venues.len());

    let mut pairs = 0usize;
    let mut collisions = 0usize;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            pairs += 1;
            if positions[i] == positions[j] {
                collisions += 1;
            }
        }
    }
    assert!(collisions * 20 <= pairs, "{collisions} of {pairs} pairs collide");

    let distinct: HashSet<(u64, u64)> = positions.iter().copied().collect();
    assert!(distinct.len() * 100 >= positions.len() * 95);
}

#[test]
fn marker_click_on_full_catalog_map_keeps_other_filters() {
    let catalog = Catalog::load().unwrap();
    let mut dir = session(catalog);
    dir.set_filters(FilterState::new().with_sport("curling"));
    assert_eq!(dir.result_count(), 0);
    assert_eq!(dir.map_input().len(), catalog.len());

    dir.select_marker("heidelberg-padel-club").unwrap();
    assert_eq!(
        dir.selected().map(|v| v.id.as_str()),
        Some("heidelberg-padel-club")
    );
    assert_eq!(dir.filters().city, "Heidelberg");
    assert_eq!(dir.filters().sports, ["curling"]);
    assert_eq!(dir.result_count(), 0);
    assert_eq!(dir.map_input().len(), catalog.len());
}

#[test]
fn unknown_venue_id_is_not_found() {
    let catalog = Catalog::load().unwrap();
    assert!(matches!(
        catalog.find_by_id("missing"),
        Err(VenueError::NotFound(_))
    ));
}
