// crates/venue-core/src/loader/json.rs
use crate::error::{Result, VenueError};
use crate::model::convert::venues_from_values;
use crate::model::Catalog;
use serde_json::Value;
use std::io::Read;
use tracing::debug;

impl Catalog {
    /// Parses a JSON catalog (a top-level array of venue records).
    ///
    /// Individual malformed records are sanitized or skipped; only a
    /// document that is not an array fails.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json_value(serde_json::from_str(s)?)
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        Self::from_json_value(serde_json::from_reader(reader)?)
    }

    fn from_json_value(value: Value) -> Result<Self> {
        let Value::Array(records) = value else {
            return Err(VenueError::InvalidData(
                "catalog must be a JSON array of venues".into(),
            ));
        };
        let total = records.len();
        let catalog = Catalog::new(venues_from_values(records));
        debug!(records = total, venues = catalog.len(), "catalog parsed");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_array_document_is_invalid() {
        assert!(matches!(
            Catalog::from_json_str(r#"{ "venues": [] }"#),
            Err(VenueError::InvalidData(_))
        ));
        assert!(matches!(
            Catalog::from_json_str("not json"),
            Err(VenueError::Json(_))
        ));
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let catalog = Catalog::from_json_str(
            r#"[{ "id": "x", "name": "First" }, { "id": "x", "name": "Second" }]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find_by_id("x").unwrap().name, "First");
    }
}
