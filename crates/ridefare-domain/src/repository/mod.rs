//! Repository trait definitions for data persistence

use ridefare_types::{AdminGrant, AdminSummary, Booking, Error, User};

/// Repository for ride bookings
pub trait BookingRepository {
    /// Insert or replace a booking
    fn save(&self, booking: &Booking) -> Result<(), Error>;

    fn find_by_id(&self, id: &str) -> Result<Option<Booking>, Error>;

    /// All bookings, newest first
    fn find_all(&self) -> Result<Vec<Booking>, Error>;

    /// Bookings of one user, newest first
    fn find_by_user(&self, user_id: &str) -> Result<Vec<Booking>, Error>;
}

/// Repository for users and admin grants
pub trait UserRepository {
    fn save(&self, user: &User) -> Result<(), Error>;

    fn find_by_id(&self, id: &str) -> Result<Option<User>, Error>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    fn find_all(&self) -> Result<Vec<User>, Error>;

    fn save_admin(&self, grant: &AdminGrant) -> Result<(), Error>;

    fn find_admins(&self) -> Result<Vec<AdminGrant>, Error>;

    /// Number of persisted admin grants
    fn admin_count(&self) -> Result<usize, Error> {
        Ok(self.find_admins()?.len())
    }
}

/// Repository for the aggregated admin summary
pub trait AdminSummaryRepository {
    fn load(&self) -> Result<AdminSummary, Error>;

    fn store(&self, summary: &AdminSummary) -> Result<(), Error>;
}
