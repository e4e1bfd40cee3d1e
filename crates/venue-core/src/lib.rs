// crates/venue-core/src/lib.rs

//! # venue-core
//!
//! The shared engine behind the venue directory clients: it takes a static
//! catalog of sports venues plus the user's filter and sort state, and
//! derives the result list, the visible page and the map points.
//!
//! - [`filter`]: the venue filter predicate
//! - [`sort`]: sort strategies with explicit missing-price handling
//! - [`geo`]: city lookup and deterministic per-venue jitter
//! - [`directory`]: the session orchestrator
//! - [`map`]: list/map selection sync, live map lifecycle, fallback plot
//!
//! Everything here is platform-free; the CLI and the WASM bindings are thin
//! shells around [`Directory`].

pub mod api; // Serializable views for the bindings
pub mod config;
pub mod directory;
pub mod error;
pub mod filter;
pub mod geo;
pub mod loader;
pub mod map;
pub mod model;
pub mod prelude;
pub mod sort;
pub mod text;
// Raw catalog input, only used by the JSON loader
#[doc(hidden)]
#[cfg(feature = "json")]
pub mod raw;

// Re-exports
pub use crate::config::DirectoryConfig;
pub use crate::directory::Directory;
pub use crate::error::{Result, VenueError};
pub use crate::filter::FilterState;
pub use crate::geo::CityCoords;
pub use crate::model::{Catalog, Venue, Weekday};
pub use crate::sort::SortStrategy;
