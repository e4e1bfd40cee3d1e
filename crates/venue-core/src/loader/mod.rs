// crates/venue-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression) and delegates to the
//! JSON or compiled (bincode) parsers.

use crate::error::{Result, VenueError};
use crate::model::{Catalog, Venue, COMPILED_SUFFIX};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

mod common_io;
#[cfg(feature = "json")]
mod json;

// Single in-process cache so the bundled dataset is parsed once per process.
#[cfg(feature = "json")]
static BUNDLED: OnceCell<Catalog> = OnceCell::new();

/// Upper bound for compiled catalogs, guards against corrupt length prefixes.
const COMPILED_LIMIT: u64 = 64 * 1024 * 1024;

impl Catalog {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "venues.json"
    }

    /// The bundled catalog, read from `data/venues.json` on first use.
    #[cfg(feature = "json")]
    pub fn load() -> Result<&'static Catalog> {
        BUNDLED.get_or_try_init(|| {
            let path = Self::default_data_dir().join(Self::default_dataset_filename());
            Self::load_from_path(path)
        })
    }

    /// Loads a catalog, choosing the parser by file name:
    /// `*.bin` compiled, `*.json.gz` gzipped JSON, anything else JSON.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        debug!(path = %path.display(), "loading catalog");

        if name.ends_with(&format!(".{COMPILED_SUFFIX}")) {
            let bytes = std::fs::read(path).map_err(|e| common_io::not_found(path, e))?;
            return Self::from_bytes(&bytes);
        }

        #[cfg(feature = "json")]
        {
            let reader = common_io::open_stream(path, name.ends_with(".gz"))?;
            Self::from_json_reader(reader)
        }

        #[cfg(not(feature = "json"))]
        {
            Err(VenueError::InvalidData(format!(
                "{} is not a compiled catalog and the 'json' feature is disabled",
                path.display()
            )))
        }
    }

    /// Reads a compiled catalog written by [`Catalog::save_as`].
    ///
    /// The venue list goes through [`Catalog::new`], so a hand-made or
    /// stale file cannot smuggle in duplicate ids.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        use bincode::Options;

        let venues: Vec<Venue> = bincode::DefaultOptions::new()
            .with_limit(COMPILED_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        Ok(Catalog::new(venues))
    }

    /// Serializes the catalog in the compiled format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        use bincode::Options;

        Ok(bincode::DefaultOptions::new()
            .with_limit(COMPILED_LIMIT)
            .serialize(self)?)
    }

    /// Writes the compiled format to `path`. The file name should end in
    /// `.bin` so [`Catalog::load_from_path`] recognizes it.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(VenueError::Io)?;
        debug!(path = %path.display(), venues = self.len(), "compiled catalog written");
        Ok(())
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn compiled_round_trip_keeps_venues() {
        let catalog = Catalog::from_json_str(
            r#"[{ "id": "a", "name": "Arena", "pricePerHour": 30,
                  "openingHours": { "friday": { "open": "10:00", "close": "20:00" } } }]"#,
        )
        .unwrap();
        let back = Catalog::from_bytes(&catalog.to_bytes().unwrap()).unwrap();
        assert_eq!(back.venues(), catalog.venues());
    }

    #[test]
    fn compiled_duplicates_are_dropped() {
        use bincode::Options;

        let catalog = Catalog::from_json_str(
            r#"[{ "id": "a", "name": "First" }, { "id": "b", "name": "Other" }]"#,
        )
        .unwrap();
        let mut venues = catalog.venues().to_vec();
        let mut dup = venues[1].clone();
        dup.id = "a".into();
        dup.name = "Second".into();
        venues.push(dup);
        let bytes = bincode::DefaultOptions::new().serialize(&venues).unwrap();

        let back = Catalog::from_bytes(&bytes).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.find_by_id("a").unwrap().name(), "First");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Catalog::load_from_path("/definitely/not/here/venues.json").unwrap_err();
        assert!(matches!(err, VenueError::NotFound(_)));
    }

    #[test]
    fn bundled_catalog_loads_with_unique_ids() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());
        let mut ids: Vec<&str> = catalog.venues().iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
