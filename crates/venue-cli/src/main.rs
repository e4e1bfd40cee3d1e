//! venue-cli — Command-line interface for venue-core
//!
//! A terminal client over the same engine the web bindings use: the list
//! with filters, sort and pagination, the venue detail view, and the map
//! view (as a point list plus a character scatter plot when no map key
//! is configured).
//!
//! Usage examples
//! --------------
//!
//! - Catalog summary
//!   $ venue-cli stats
//!
//! - Padel venues open on Sunday, cheapest first, two pages
//!   $ venue-cli list --sport padel --day sunday --sort price-asc --pages 2
//!
//! - Detail view
//!   $ venue-cli show padelbox-mannheim
//!
//! - Map view after clicking a marker
//!   $ venue-cli map --select heidelberg-padel-club
//!
//! Configuration
//! -------------
//!
//! `--config <file.toml>` sets page size and map options; a `.env` file or
//! the environment may provide `VENUE_MAP_API_KEY` and `VENUE_PAGE_SIZE`.
//! Set `RUST_LOG=debug` to trace recomputes and catalog sanitizing.
mod args;
mod plot;

use crate::args::{CliArgs, Commands, FilterArgs};
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use venue_core::api::FacetsView;
use venue_core::map::scatter_layout;
use venue_core::prelude::*;

const PLOT_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 20;

fn main() -> anyhow::Result<ExitCode> {
    // Before the subscriber, so RUST_LOG may come from .env too.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => DirectoryConfig::load_from_path(path)
            .with_context(|| format!("reading config {path}"))?,
        None => DirectoryConfig::default(),
    }
    .with_env_overrides();

    let owned;
    let catalog: &Catalog = match &args.input {
        Some(path) => {
            owned = Catalog::load_from_path(path)
                .with_context(|| format!("loading catalog {path}"))?;
            &owned
        }
        None => Catalog::load().context("loading bundled catalog")?,
    };
    let coords = CityCoords::bundled();
    debug!(venues = catalog.len(), cities = coords.len(), "catalog ready");

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats(coords);
            println!("Catalog statistics:");
            println!("  Venues: {}", stats.venues);
            println!("  With price: {}", stats.priced);
            println!("  Cities: {}", stats.cities);
            println!("  On the map: {}", stats.mappable);
        }

        Commands::Facets => {
            let facets = FacetsView::from(catalog);
            println!("Sports:    {}", facets.sports.join(", "));
            println!("Amenities: {}", facets.amenities.join(", "));
            println!("Cities:    {}", facets.cities.join(", "));
        }

        Commands::List {
            filters,
            sort,
            pages,
        } => {
            let mut dir = Directory::new(catalog, coords, config);
            dir.set_filters(filters.to_filter_state());
            dir.set_sort(sort);
            for _ in 1..pages.max(1) {
                if !dir.load_more() {
                    break;
                }
            }
            print_list(&dir);
        }

        Commands::Show { id } => match catalog.find_by_id(&id) {
            Ok(venue) => print_venue(venue),
            Err(VenueError::NotFound(_)) => {
                eprintln!("Venue not found: {id}");
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e.into()),
        },

        Commands::Map { filters, select } => {
            let mut dir = Directory::new(catalog, coords, config);
            dir.set_filters(filters.to_filter_state());
            if let Some(id) = select {
                if let Err(e) = dir.select_marker(&id) {
                    eprintln!("{e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
            print_map(&dir, &filters);
        }

        Commands::Build { out } => {
            catalog
                .save_as(&out)
                .with_context(|| format!("writing {out}"))?;
            println!("Wrote {} venues to {out}", catalog.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_list(dir: &Directory<'_>) {
    let visible = dir.visible();
    if visible.is_empty() {
        println!("No venues match these filters.");
        println!(
            "Run `venue-cli list` without filters to see all {} venues.",
            dir.catalog().len()
        );
        return;
    }

    for (i, v) in visible.iter().enumerate() {
        println!(
            "{:>3}. {} [{}]\n     {} · {} · {}",
            i + 1,
            v.name(),
            v.id,
            v.location_label(),
            v.price_label(),
            v.sports.join(", ")
        );
    }
    println!();
    println!(
        "Showing {} of {} (sorted by {})",
        visible.len(),
        dir.result_count(),
        dir.sort()
    );
    if dir.has_more() {
        println!("More results available, use --pages to load more.");
    }
}

fn print_venue(v: &Venue) {
    println!("{}", v.name());
    println!("  Id:        {}", v.id);
    println!("  Location:  {}", v.location_label());
    println!("  Price:     {}", v.price_label());
    println!("  Sports:    {}", v.sports.join(", "));
    println!("  Amenities: {}", v.amenities.join(", "));
    if !v.description.is_empty() {
        println!("  About:     {}", v.description);
    }
    println!("  Opening hours:");
    for (day, hours) in v.opening_hours.iter() {
        println!("    {:<10} {}", day.to_string(), hours.label());
    }
    match &v.external_url {
        Some(url) => println!("  Book at:   {url}"),
        None => println!("  Book at:   contact the venue"),
    }
}

fn print_map(dir: &Directory<'_>, filters: &FilterArgs) {
    let points = dir.map_points();
    let selected = dir.map().selected_id();
    let camera = dir.map().camera();

    if dir.result_count() == 0 && !filters.to_filter_state().is_empty() {
        println!("No venues match; the map shows the whole catalog.");
    }
    println!(
        "Camera: {:.4}, {:.4} @ zoom {:.1}",
        camera.center.lat, camera.center.lng, camera.zoom
    );
    if !dir.filters().city.is_empty() {
        println!("Focus city: {}", dir.filters().city);
    }
    for p in &points {
        let mark = if selected == Some(p.venue.id.as_str()) { '*' } else { ' ' };
        println!(
            "{mark} {:>9.5} {:>9.5}  {} ({})",
            p.position.lat,
            p.position.lng,
            p.venue.name(),
            p.venue.city()
        );
    }
    let unmapped = dir.map_input().len() - points.len();
    if unmapped > 0 {
        println!("  ({unmapped} venue(s) without a known city coordinate)");
    }

    if dir.config().map.api_key.is_none() {
        println!();
        println!("No map key configured, fallback view:");
        let dots = scatter_layout(&points);
        for line in plot::ascii_scatter(&dots, selected, PLOT_WIDTH, PLOT_HEIGHT) {
            println!("{line}");
        }
    }
}
