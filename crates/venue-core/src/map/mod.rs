// crates/venue-core/src/map/mod.rs

//! # Map Synchronizer
//!
//! - [`sync`]: which venues go on the map, camera, and the selected marker.
//! - [`mount`]: lifecycle of an asynchronously loaded live map backend.
//! - [`scatter`]: the fallback renderer used when no live backend exists.

pub mod mount;
pub mod scatter;
pub mod sync;

pub use mount::{FallbackReason, LoadTicket, MapBackend, MapMount, RenderMode};
pub use scatter::{scatter_layout, ScatterDot};
pub use sync::{map_input, MapCamera, MapSync};
