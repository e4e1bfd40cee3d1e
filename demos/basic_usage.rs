//! Basic usage example for venue-finder
//!
//! This example demonstrates how to:
//! - Load the bundled venue catalog
//! - Filter by sport, city, price and weekday
//! - Sort and paginate the results
//! - Open a venue detail view

use venue_finder::prelude::*;

fn main() -> Result<()> {
    println!("=== Venue Finder Basic Usage Example ===\n");

    let catalog = Catalog::load()?;
    let coords = CityCoords::bundled();
    println!("✓ Loaded {} venues\n", catalog.len());

    let mut dir = Directory::new(catalog, coords, DirectoryConfig::default());

    // Example 1: first page, recommended order
    println!("--- Example 1: First page ---");
    for v in dir.visible() {
        println!("{} · {} · {}", v.name(), v.location_label(), v.price_label());
    }
    println!("Showing {} of {}\n", dir.visible().len(), dir.result_count());

    // Example 2: padel in Mannheim, cheapest first
    println!("--- Example 2: Padel in Mannheim, cheapest first ---");
    dir.set_filters(FilterState::new().with_sport("padel").with_city("mannheim"));
    dir.set_sort(SortStrategy::PriceAscending);
    for v in dir.visible() {
        println!("{} · {}", v.name(), v.price_label());
    }
    println!();

    // Example 3: open on Sunday, at most 50 €/h
    println!("--- Example 3: Open on Sunday, up to 50 €/h ---");
    dir.set_filters(
        FilterState::new()
            .with_day(Weekday::Sunday)
            .with_price_range(None, Some(50.0)),
    );
    while dir.load_more() {}
    for v in dir.visible() {
        println!("{} ({})", v.name(), v.opening_hours.day(Weekday::Sunday).label());
    }
    println!();

    // Example 4: detail view
    println!("--- Example 4: Detail view ---");
    match catalog.find_by_id("padelbox-mannheim") {
        Ok(v) => {
            println!("{}", v.name());
            for (day, hours) in v.opening_hours.iter() {
                println!("  {day:<10} {}", hours.label());
            }
        }
        Err(e) => println!("{e}"),
    }

    Ok(())
}
