// crates/venue-core/src/loader/common_io.rs
use crate::error::{Result, VenueError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub(super) fn not_found(path: &Path, e: std::io::Error) -> VenueError {
    VenueError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when `gzip` is
/// set. Returns a generic reader so the caller doesn't care about compression.
#[allow(dead_code)]
pub(super) fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| not_found(path, e))?;
    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(VenueError::InvalidData(format!(
            "{} is gzipped but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
