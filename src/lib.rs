//! venue-finder: workspace facade over [`venue_core`] for the demos.
pub use venue_core::*;
