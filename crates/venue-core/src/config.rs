// crates/venue-core/src/config.rs
use crate::error::Result;
use crate::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable carrying the map backend credential.
pub const ENV_MAP_API_KEY: &str = "VENUE_MAP_API_KEY";
/// Environment variable overriding [`DirectoryConfig::page_size`].
pub const ENV_PAGE_SIZE: &str = "VENUE_PAGE_SIZE";

/// Settings of a browsing session. Every field has a default, so an empty
/// TOML file is a valid config.
///
/// ```toml
/// page_size = 9
/// reset_page_on_sort = false
///
/// [map]
/// min_focus_zoom = 13.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Pagination step; `loadMore` reveals this many more venues.
    pub page_size: usize,
    /// Whether changing the sort order resets pagination like a filter
    /// change does. `false` keeps the cursor across sort changes.
    pub reset_page_on_sort: bool,
    pub map: MapConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Credential of the live map backend. `None` selects the fallback
    /// scatter renderer.
    pub api_key: Option<String>,
    /// Zoom level the camera rises to at least when focusing a city.
    pub min_focus_zoom: f64,
    pub default_center: LatLng,
    pub default_zoom: f64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: 6,
            reset_page_on_sort: true,
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            min_focus_zoom: 12.0,
            default_center: LatLng::new(51.1657, 10.4515),
            default_zoom: 6.0,
        }
    }
}

impl DirectoryConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: DirectoryConfig = toml::from_str(s)?;
        Ok(cfg.sanitized())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading directory config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Applies [`ENV_MAP_API_KEY`] and [`ENV_PAGE_SIZE`] from the process
    /// environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Same as [`DirectoryConfig::with_env_overrides`] with a custom lookup,
    /// so tests need not touch the process environment.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(ENV_MAP_API_KEY) {
            self.map.api_key = Some(key);
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE).and_then(|s| s.trim().parse().ok()) {
            self.page_size = size;
        }
        self.sanitized()
    }

    /// Restores the default page size for 0 and drops a blank map key.
    pub fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DirectoryConfig::default().page_size;
        }
        if self
            .map
            .api_key
            .as_deref()
            .is_some_and(|k| k.trim().is_empty())
        {
            self.map.api_key = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg = DirectoryConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, DirectoryConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = DirectoryConfig::from_toml_str(
            "page_size = 9\nreset_page_on_sort = false\n[map]\nmin_focus_zoom = 14.0\n",
        )
        .unwrap();
        assert_eq!(cfg.page_size, 9);
        assert!(!cfg.reset_page_on_sort);
        assert_eq!(cfg.map.min_focus_zoom, 14.0);
        assert_eq!(cfg.map.default_zoom, 6.0);
    }

    #[test]
    fn overrides_fill_credential_and_ignore_blank_values() {
        let cfg = DirectoryConfig::default().with_overrides(|k| match k {
            ENV_MAP_API_KEY => Some("secret".into()),
            ENV_PAGE_SIZE => Some("0".into()),
            _ => None,
        });
        assert_eq!(cfg.map.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.page_size, 6);

        let blank = DirectoryConfig::default().with_overrides(|k| {
            (k == ENV_MAP_API_KEY).then(|| "  ".to_string())
        });
        assert_eq!(blank.map.api_key, None);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        assert!(matches!(
            DirectoryConfig::from_toml_str("page_size = \"many\""),
            Err(crate::VenueError::Config(_))
        ));
    }
}
