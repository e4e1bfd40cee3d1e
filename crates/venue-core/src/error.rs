// crates/venue-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, VenueError>;

/// Errors raised while loading a catalog or looking up venues.
///
/// Missing venue data (no price, no city, no coordinate, no opening hours)
/// is never an error; it is modelled as a display state on [`crate::Venue`].
#[derive(Debug, Error)]
pub enum VenueError {
    /// A venue id or a dataset file could not be found.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("compiled catalog error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
