//! venue-core prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::config::{DirectoryConfig, MapConfig};
pub use crate::directory::Directory;
pub use crate::error::{Result, VenueError};
pub use crate::filter::{matches, FilterState};
pub use crate::geo::{project, project_all, CityCoords, LatLng, VenuePoint};
pub use crate::map::{
    scatter_layout, FallbackReason, LoadTicket, MapBackend, MapCamera, MapMount, MapSync,
    RenderMode, ScatterDot,
};
pub use crate::model::{Catalog, CatalogStats, DayHours, OpeningHours, Venue, Weekday};
pub use crate::sort::{compare, SortStrategy};
