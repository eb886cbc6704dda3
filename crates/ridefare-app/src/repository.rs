//! Repository adapters for persistence layer

use std::path::PathBuf;

use ridefare_infra::persistence::{
    FileAdminSummaryRepository, FileBookingRepository, FileUserRepository,
};
use ridefare_types::Result;

use crate::config::Config;

/// Open file-based booking repository
pub fn open_booking_repo(config: &Config) -> Result<FileBookingRepository> {
    FileBookingRepository::open(config.store_dir()?)
}

/// Open file-based user repository
pub fn open_user_repo(config: &Config) -> Result<FileUserRepository> {
    FileUserRepository::open(config.store_dir()?)
}

/// Open file-based admin summary repository
pub fn open_admin_summary_repo(config: &Config) -> Result<FileAdminSummaryRepository> {
    FileAdminSummaryRepository::open(config.store_dir()?)
}

/// The three repositories sharing one store directory
pub struct Repositories {
    pub bookings: FileBookingRepository,
    pub users: FileUserRepository,
    pub summary: FileAdminSummaryRepository,
}

/// Open every repository under a custom directory
pub fn open_all_at(store_dir: PathBuf) -> Result<Repositories> {
    Ok(Repositories {
        bookings: FileBookingRepository::open(store_dir.clone())?,
        users: FileUserRepository::open(store_dir.clone())?,
        summary: FileAdminSummaryRepository::open(store_dir)?,
    })
}

/// Open every repository under the configured store directory
pub fn open_all(config: &Config) -> Result<Repositories> {
    open_all_at(config.store_dir()?)
}
