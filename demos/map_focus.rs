//! Map synchronisation example
//!
//! Typing a city pans the map; clicking a marker narrows the list to that
//! marker's city. Without a map key the scatter fallback is used.

use venue_finder::prelude::*;

fn main() -> Result<()> {
    let catalog = Catalog::load()?;
    let mut dir = Directory::new(catalog, CityCoords::bundled(), DirectoryConfig::default());

    let show = |dir: &Directory<'_>| {
        let cam = dir.map().camera();
        println!(
            "camera {:.4},{:.4} z{:.0} · selected {:?} · {} results",
            cam.center.lat,
            cam.center.lng,
            cam.zoom,
            dir.map().selected_id(),
            dir.result_count()
        );
    };

    println!("--- Initial view ---");
    show(&dir);

    println!("--- Typing \"heidelberg\" ---");
    dir.set_city("heidelberg");
    show(&dir);

    println!("--- Clicking a Mannheim marker ---");
    dir.select_marker("padelbox-mannheim")?;
    show(&dir);

    println!("--- Fallback scatter (no map key) ---");
    let mount: MapMount<NoBackend> = MapMount::new(&dir.config().map);
    println!("render mode: {}", mount.mode().as_str());
    for dot in scatter_layout(&dir.map_points()) {
        println!("  {:<28} x={:.2} y={:.2}", dot.venue.name(), dot.x, dot.y);
    }

    println!("--- Clearing the selection ---");
    dir.clear_selection();
    show(&dir);

    Ok(())
}

/// Stand-in for a live map; never loaded in this demo.
struct NoBackend;

impl MapBackend for NoBackend {
    type Marker = ();

    fn add_marker(&mut self, _point: &VenuePoint<'_>) {}
    fn remove_marker(&mut self, _marker: ()) {}
    fn set_camera(&mut self, _camera: MapCamera) {}
}
