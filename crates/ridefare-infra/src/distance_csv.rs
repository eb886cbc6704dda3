//! CSV loader for fallback distances
//!
//! Expected header: `origin,destination,distance_km`

use std::io::Read;
use std::path::Path;

use ridefare_domain::model::DistanceEntry;
use ridefare_types::{ConfigError, Result};

/// Load fallback distance entries from a CSV file
pub fn load_fallback_distances<P: AsRef<Path>>(path: P) -> Result<Vec<DistanceEntry>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    read_entries(reader)
}

/// Load fallback distance entries from any reader
pub fn load_fallback_distances_from_reader<R: Read>(rdr: R) -> Result<Vec<DistanceEntry>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);
    read_entries(reader)
}

fn read_entries<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<DistanceEntry>> {
    let mut entries = Vec::new();
    for (row_idx, record) in reader.deserialize::<DistanceEntry>().enumerate() {
        let entry = record?;
        // +2: 0-based index plus header row
        let row_num = row_idx + 2;
        if !(entry.distance_km > 0.0 && entry.distance_km.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "row {}: distance must be positive, got {}",
                row_num, entry.distance_km
            ))
            .into());
        }
        if entry.origin.is_empty() || entry.destination.is_empty() {
            return Err(ConfigError::Invalid(format!("row {}: empty place name", row_num)).into());
        }
        entries.push(entry);
    }

    tracing::debug!(count = entries.len(), "loaded fallback distances from CSV");
    Ok(entries)
}
