// crates/venue-core/src/model/mod.rs
pub mod catalog;
#[cfg(feature = "json")]
pub mod convert;
pub mod venue;

pub use catalog::{Catalog, CatalogStats};
pub use venue::{DayHours, OpeningHours, Venue, Weekday};

/// File extension of a compiled (bincode) catalog.
pub const COMPILED_SUFFIX: &str = "bin";
