//! venue-wasm — WebAssembly bindings for venue-core
//!
//! This crate exposes the directory session to JavaScript. The venue
//! catalog is embedded in the WASM binary; the page holds one session
//! (filters, sort, pagination, map selection) and re-renders from the
//! derived views after each call.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Catalog queries: `venue_count()`, `facets()`, `venue_by_id(id)`
//! - Session setters: `set_filters(json)`, `set_city`, `toggle_sport`,
//!   `toggle_amenity`, `set_price_range`, `set_day`, `set_sort`,
//!   `load_more`, `reset`
//! - Derived views: `visible_venues()`, `page_state()`, `result_count()`,
//!   `has_more()`, `map_points()`, `map_camera()`, `fallback_dots()`
//! - Map lifecycle: `map_begin_load()`, `map_ready(...)`, `map_failed(...)`,
//!   `map_error(reason)`, `map_teardown()`, `map_render_mode()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { configure, map_begin_load, map_ready, set_sort, visible_venues } from 'venue-wasm';
//!
//! await init();
//! configure(6, window.MAP_KEY ?? null);
//! set_sort('price-asc');
//! render(visible_venues());
//!
//! const ticket = map_begin_load();
//! if (ticket !== undefined) {
//!   const sdk = await loadMapSdk();
//!   map_ready(ticket, sdk.addMarker, sdk.removeMarker, sdk.setView);
//! }
//! ```
//!
//! Notes
//! -----
//! - Setters return nothing; read the derived views afterwards.
//! - Without a map key `map_render_mode()` is `"fallback"` and the page
//!   draws `fallback_dots()` instead of a live map.
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::cell::RefCell;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use venue_core::api::{CameraView, DotView, FacetsView, PointView, VenueView};
use venue_core::prelude::*;

static EMBEDDED_CATALOG: &str = include_str!("../../venue-core/data/venues.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

thread_local! {
    static SESSION: RefCell<Option<Directory<'static>>> = const { RefCell::new(None) };
    static MOUNT: RefCell<Option<MapMount<JsMapBackend>>> = const { RefCell::new(None) };
}

fn console(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        Catalog::from_json_str(EMBEDDED_CATALOG).unwrap_or_else(|e| {
            console(&format!("embedded catalog unreadable: {e}"));
            Catalog::new(Vec::new())
        })
    })
}

fn with_session<R>(f: impl FnOnce(&mut Directory<'static>) -> R) -> R {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let dir = slot.get_or_insert_with(|| {
            Directory::new(catalog(), CityCoords::bundled(), DirectoryConfig::default())
        });
        f(dir)
    })
}

fn js<T: Serialize>(value: &T) -> JsValue {
    to_value(value).unwrap_or(JsValue::NULL)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console(&format!("✓ Loaded {} venues", catalog().len()));
}

/* --------------------------------------------------------------------------
   Configuration and catalog queries
-------------------------------------------------------------------------- */

/// Starts a fresh session. Tears down any mounted map.
#[wasm_bindgen]
pub fn configure(page_size: usize, api_key: Option<String>) {
    let defaults = DirectoryConfig::default();
    let config = DirectoryConfig {
        page_size,
        map: MapConfig {
            api_key,
            ..defaults.map.clone()
        },
        ..defaults
    }
    .sanitized();

    map_teardown();
    MOUNT.with(|m| *m.borrow_mut() = Some(MapMount::new(&config.map)));
    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(Directory::new(catalog(), CityCoords::bundled(), config));
    });
}

#[wasm_bindgen]
pub fn venue_count() -> usize {
    catalog().len()
}

#[wasm_bindgen]
pub fn facets() -> JsValue {
    js(&FacetsView::from(catalog()))
}

/// Detail view; `null` for an unknown id.
#[wasm_bindgen]
pub fn venue_by_id(id: &str) -> JsValue {
    match catalog().find_by_id(id) {
        Ok(v) => js(&VenueView::from(v)),
        Err(_) => JsValue::NULL,
    }
}

/* --------------------------------------------------------------------------
   Session setters
-------------------------------------------------------------------------- */

/// Replaces the filter state with a JSON-encoded `FilterState`.
#[wasm_bindgen]
pub fn set_filters(json: &str) -> std::result::Result<(), JsValue> {
    let filters: FilterState =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_session(|dir| dir.set_filters(filters));
    sync_map();
    Ok(())
}

#[wasm_bindgen]
pub fn current_filters() -> JsValue {
    with_session(|dir| js(dir.filters()))
}

#[wasm_bindgen]
pub fn set_city(city: &str) {
    with_session(|dir| dir.set_city(city));
    sync_map();
}

#[wasm_bindgen]
pub fn toggle_sport(sport: &str) {
    with_session(|dir| dir.update_filters(|f| f.toggle_sport(sport)));
    sync_map();
}

#[wasm_bindgen]
pub fn toggle_amenity(amenity: &str) {
    with_session(|dir| dir.update_filters(|f| f.toggle_amenity(amenity)));
    sync_map();
}

#[wasm_bindgen]
pub fn set_price_range(min: Option<f64>, max: Option<f64>) {
    with_session(|dir| {
        dir.update_filters(|f| {
            f.price_min = min;
            f.price_max = max;
        })
    });
    sync_map();
}

/// `""` clears the weekday filter. Returns `false` for an unknown day.
#[wasm_bindgen]
pub fn set_day(day: &str) -> bool {
    let day = match day.trim() {
        "" => None,
        s => match s.parse::<Weekday>() {
            Ok(d) => Some(d),
            Err(_) => return false,
        },
    };
    with_session(|dir| dir.update_filters(|f| f.day = day));
    sync_map();
    true
}

/// Returns `false` (and keeps the current sort) for an unknown strategy.
#[wasm_bindgen]
pub fn set_sort(strategy: &str) -> bool {
    match strategy.parse::<SortStrategy>() {
        Ok(sort) => {
            with_session(|dir| dir.set_sort(sort));
            true
        }
        Err(_) => false,
    }
}

#[wasm_bindgen]
pub fn load_more() -> bool {
    with_session(|dir| dir.load_more())
}

/// Clears filters, sort, pagination and the map selection.
#[wasm_bindgen]
pub fn reset() {
    with_session(|dir| dir.reset());
    sync_map();
}

/* --------------------------------------------------------------------------
   Derived views
-------------------------------------------------------------------------- */

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageState<'a> {
    visible: Vec<VenueView<'a>>,
    result_count: usize,
    has_more: bool,
    active_filters: usize,
    sort: &'static str,
}

#[wasm_bindgen]
pub fn visible_venues() -> JsValue {
    with_session(|dir| {
        let views: Vec<_> = dir.visible().into_iter().map(VenueView::from).collect();
        js(&views)
    })
}

/// Everything the list view needs in one call.
#[wasm_bindgen]
pub fn page_state() -> JsValue {
    with_session(|dir| {
        js(&PageState {
            visible: dir.visible().into_iter().map(VenueView::from).collect(),
            result_count: dir.result_count(),
            has_more: dir.has_more(),
            active_filters: dir.filters().active_count(),
            sort: dir.sort().as_str(),
        })
    })
}

#[wasm_bindgen]
pub fn result_count() -> usize {
    with_session(|dir| dir.result_count())
}

#[wasm_bindgen]
pub fn has_more() -> bool {
    with_session(|dir| dir.has_more())
}

/* --------------------------------------------------------------------------
   Map
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn map_points() -> JsValue {
    with_session(|dir| {
        let selected = dir.map().selected_id();
        let views: Vec<_> = dir
            .map_points()
            .iter()
            .map(|p| PointView::new(p, selected))
            .collect();
        js(&views)
    })
}

#[wasm_bindgen]
pub fn map_camera() -> JsValue {
    with_session(|dir| js(&CameraView::from(dir.map().camera())))
}

#[wasm_bindgen]
pub fn selected_venue() -> JsValue {
    with_session(|dir| match dir.selected() {
        Some(v) => js(&VenueView::from(v)),
        None => JsValue::NULL,
    })
}

/// Marker click (live map or fallback dot). Returns `false` for an
/// unknown id.
#[wasm_bindgen]
pub fn select_marker(id: &str) -> bool {
    let ok = with_session(|dir| dir.select_marker(id).is_ok());
    if ok {
        sync_map();
    }
    ok
}

#[wasm_bindgen]
pub fn clear_selection() {
    with_session(|dir| dir.clear_selection());
    sync_map();
}

/// Unit-square dots for the no-SDK renderer.
#[wasm_bindgen]
pub fn fallback_dots() -> JsValue {
    with_session(|dir| {
        let selected = dir.map().selected_id();
        let points = dir.map_points();
        let dots: Vec<_> = scatter_layout(&points)
            .iter()
            .map(|d| DotView::new(d, selected))
            .collect();
        js(&dots)
    })
}

/// The live map as seen from Rust: three JS callbacks.
///
/// `add(point)` returns a marker handle, `remove(handle)` releases it and
/// `setView(camera)` moves the viewport.
struct JsMapBackend {
    add: Function,
    remove: Function,
    set_view: Function,
    selected: Option<String>,
}

impl MapBackend for JsMapBackend {
    type Marker = JsValue;

    fn add_marker(&mut self, point: &VenuePoint<'_>) -> JsValue {
        let view = PointView::new(point, self.selected.as_deref());
        self.add
            .call1(&JsValue::NULL, &js(&view))
            .unwrap_or_else(|e| {
                console(&format!("map add marker failed: {e:?}"));
                JsValue::UNDEFINED
            })
    }

    fn remove_marker(&mut self, marker: JsValue) {
        if marker.is_undefined() {
            return;
        }
        if let Err(e) = self.remove.call1(&JsValue::NULL, &marker) {
            console(&format!("map remove marker failed: {e:?}"));
        }
    }

    fn set_camera(&mut self, camera: MapCamera) {
        if let Err(e) = self.set_view.call1(&JsValue::NULL, &js(&CameraView::from(camera))) {
            console(&format!("map set view failed: {e:?}"));
        }
    }
}

fn sync_map() {
    let (points, camera, selected) = with_session(|dir| {
        (
            dir.map_points(),
            dir.map().camera(),
            dir.map().selected_id().map(str::to_owned),
        )
    });
    MOUNT.with(|m| {
        if let Some(mount) = m.borrow_mut().as_mut() {
            if let Some(backend) = mount.backend_mut() {
                backend.selected = selected;
            }
            mount.sync(&points, camera);
        }
    });
}

fn with_mount<R>(f: impl FnOnce(&mut MapMount<JsMapBackend>) -> R) -> R {
    MOUNT.with(|m| {
        let mut slot = m.borrow_mut();
        let mount = slot.get_or_insert_with(|| {
            with_session(|dir| MapMount::new(&dir.config().map))
        });
        f(mount)
    })
}

/// Starts acquiring the live map. Returns the ticket to hand back to
/// `map_ready`/`map_failed`, or `undefined` when no live map will be used.
#[wasm_bindgen]
pub fn map_begin_load() -> Option<u32> {
    with_mount(|m| m.begin_load()).and_then(|t| u32::try_from(t.id()).ok())
}

/// The SDK finished loading. Stale tickets are ignored (returns `false`).
#[wasm_bindgen]
pub fn map_ready(ticket: u32, add: Function, remove: Function, set_view: Function) -> bool {
    let backend = JsMapBackend {
        add,
        remove,
        set_view,
        selected: None,
    };
    let accepted = with_mount(|m| m.resolve(LoadTicket::from_id(ticket.into()), Ok(backend)));
    if accepted {
        sync_map();
    }
    accepted
}

/// The SDK failed to load. Stale tickets are ignored (returns `false`).
#[wasm_bindgen]
pub fn map_failed(ticket: u32, reason: &str) -> bool {
    with_mount(|m| m.resolve(LoadTicket::from_id(ticket.into()), Err(reason.to_string())))
}

/// A live map broke at runtime: its markers are released and the page
/// switches to `fallback_dots()`.
#[wasm_bindgen]
pub fn map_error(reason: &str) {
    with_mount(|m| m.fail(reason));
}

/// Releases every marker and ignores loads still in flight.
#[wasm_bindgen]
pub fn map_teardown() {
    MOUNT.with(|m| {
        if let Some(mount) = m.borrow_mut().as_mut() {
            mount.teardown();
        }
    });
}

/// One of `idle`, `loading`, `live`, `fallback`, `detached`.
#[wasm_bindgen]
pub fn map_render_mode() -> String {
    with_mount(|m| m.mode().as_str().to_string())
}
