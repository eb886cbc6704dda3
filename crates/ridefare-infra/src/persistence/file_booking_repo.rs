//! File-based booking repository

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use ridefare_domain::repository::BookingRepository;
use ridefare_types::{Booking, Error, Result};

use super::{read_store, write_store};

/// Stores bookings keyed by id in `bookings.json`
pub struct FileBookingRepository {
    store_path: PathBuf,
    bookings: RefCell<HashMap<String, Booking>>,
}

impl FileBookingRepository {
    /// Create or load a booking store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("bookings.json");
        let bookings = read_store(&store_path)?;

        tracing::debug!(path = %store_path.display(), "opened booking store");
        Ok(Self {
            store_path,
            bookings: RefCell::new(bookings),
        })
    }

    pub fn len(&self) -> usize {
        self.bookings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.borrow().is_empty()
    }

    fn persist(&self) -> Result<()> {
        write_store(&self.store_path, &*self.bookings.borrow())
    }

    fn sorted(&self, filter: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        let mut bookings: Vec<_> = self
            .bookings
            .borrow()
            .values()
            .filter(|&b| filter(b))
            .cloned()
            .collect();
        bookings.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        bookings
    }
}

impl BookingRepository for FileBookingRepository {
    fn save(&self, booking: &Booking) -> std::result::Result<(), Error> {
        self.bookings
            .borrow_mut()
            .insert(booking.id.clone(), booking.clone());
        self.persist()
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Booking>, Error> {
        Ok(self.bookings.borrow().get(id).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<Booking>, Error> {
        Ok(self.sorted(|_| true))
    }

    fn find_by_user(&self, user_id: &str) -> std::result::Result<Vec<Booking>, Error> {
        Ok(self.sorted(|b| b.user_id == user_id))
    }
}
