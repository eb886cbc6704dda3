//! File-based admin summary repository

use std::fs;
use std::path::PathBuf;

use ridefare_domain::repository::AdminSummaryRepository;
use ridefare_types::{AdminSummary, Error, Result};

use super::{read_store, write_store};

/// Stores the aggregated summary in `admin.json`
pub struct FileAdminSummaryRepository {
    store_path: PathBuf,
}

impl FileAdminSummaryRepository {
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("admin.json"),
        })
    }
}

impl AdminSummaryRepository for FileAdminSummaryRepository {
    fn load(&self) -> std::result::Result<AdminSummary, Error> {
        read_store(&self.store_path)
    }

    fn store(&self, summary: &AdminSummary) -> std::result::Result<(), Error> {
        write_store(&self.store_path, summary)
    }
}
