//! Persistence implementations
//!
//! JSON file-backed implementations of the repository traits. Every write
//! rewrites the whole file.

mod file_admin_summary_repo;
mod file_booking_repo;
mod file_user_repo;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use ridefare_types::{Result, StoreError};

pub use file_admin_summary_repo::FileAdminSummaryRepository;
pub use file_booking_repo::FileBookingRepository;
pub use file_user_repo::FileUserRepository;

/// Read a JSON store file, or the default value when it does not exist yet
fn read_store<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader)
        .map_err(|e| StoreError::Corrupted(format!("{}: {}", path.display(), e)).into())
}

/// Write a JSON store file, flushing before returning
fn write_store<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
