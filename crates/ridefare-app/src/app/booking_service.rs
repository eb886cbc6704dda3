//! Booking Service - ride booking lifecycle
//!
//! 1. `create_booking` validates places and vehicle, stores a pending booking
//! 2. `route_options` prices both routes for a booking
//! 3. `select_route` reprices, confirms and folds the fare into the admin summary
//! 4. `cancel_booking` cancels a pending or confirmed booking

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use ridefare_domain::repository::{AdminSummaryRepository, BookingRepository};
use ridefare_domain::service::PlaceValidator;
use ridefare_types::{
    Booking, BookingStatus, Error, PricedRoute, PricingError, RouteLabel, StoreError,
};

use super::pricing_service::PricingService;

/// Errors specific to the booking service
#[derive(Debug, Error)]
pub enum BookingServiceError {
    #[error("Place not found in {city}: {place}")]
    PlaceNotFound { city: String, place: String },

    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Booking {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("No {0} route offered")]
    RouteUnavailable(RouteLabel),

    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<Error> for BookingServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Pricing(e) => BookingServiceError::Pricing(e),
            Error::Store(e) => e.into(),
            _ => BookingServiceError::StoreError(err.to_string()),
        }
    }
}

impl From<StoreError> for BookingServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => BookingServiceError::NotFound(id),
            StoreError::InvalidTransition { id, from, to } => {
                BookingServiceError::InvalidTransition { id, from, to }
            }
            other => BookingServiceError::StoreError(other.to_string()),
        }
    }
}

type Result<T> = std::result::Result<T, BookingServiceError>;

pub struct BookingService<'a> {
    bookings: &'a dyn BookingRepository,
    summary: &'a dyn AdminSummaryRepository,
    pricing: &'a PricingService,
    validator: &'a dyn PlaceValidator,
}

impl<'a> BookingService<'a> {
    pub fn new(
        bookings: &'a dyn BookingRepository,
        summary: &'a dyn AdminSummaryRepository,
        pricing: &'a PricingService,
        validator: &'a dyn PlaceValidator,
    ) -> Self {
        Self {
            bookings,
            summary,
            pricing,
            validator,
        }
    }

    /// Validate the request and store it as a pending booking
    pub fn create_booking(
        &self,
        user_id: &str,
        city: &str,
        origin: &str,
        destination: &str,
        vehicle_type: &str,
    ) -> Result<Booking> {
        for place in [origin, destination] {
            if !self.validator.validate_place(city, place) {
                return Err(BookingServiceError::PlaceNotFound {
                    city: city.to_string(),
                    place: place.to_string(),
                });
            }
        }
        if !self.pricing.pricing().tariffs.contains(vehicle_type) {
            return Err(PricingError::InvalidVehicleType(vehicle_type.to_string()).into());
        }

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            city: city.to_string(),
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            vehicle_type: vehicle_type.to_string(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
            confirmed_at: None,
            cancelled_at: None,
            selected_route: None,
            pricing: None,
        };
        self.bookings.save(&booking)?;

        tracing::info!(booking_id = %booking.id, user_id, route = %booking.route_key(), "booking created");
        Ok(booking)
    }

    /// Both priced routes for a stored booking, main first
    pub fn route_options(&self, booking_id: &str) -> Result<Vec<PricedRoute>> {
        let booking = self.require(booking_id)?;
        self.price(&booking)
    }

    /// Confirm a pending booking with the chosen route
    pub fn select_route(&self, booking_id: &str, label: RouteLabel) -> Result<Booking> {
        let mut booking = self.require(booking_id)?;
        if !booking.status.can_transition_to(BookingStatus::Confirmed) {
            return Err(BookingServiceError::InvalidTransition {
                id: booking.id,
                from: booking.status,
                to: BookingStatus::Confirmed,
            });
        }

        let chosen = self
            .price(&booking)?
            .into_iter()
            .find(|r| r.route.label == label)
            .ok_or(BookingServiceError::RouteUnavailable(label))?;

        // Summary must be readable before anything is written
        let mut summary = self.summary.load()?;
        summary.record(&booking.route_key(), &chosen.fare);

        let pending = booking.clone();
        booking.transition_to(BookingStatus::Confirmed, Utc::now())?;
        booking.selected_route = Some(chosen.route);
        booking.pricing = Some(chosen.fare.clone());
        self.bookings.save(&booking)?;

        if let Err(e) = self.summary.store(&summary) {
            tracing::warn!(booking_id = %booking.id, error = %e, "summary update failed, reverting booking");
            self.bookings.save(&pending)?;
            return Err(e.into());
        }

        tracing::info!(
            booking_id = %booking.id,
            route = %label,
            fare = %chosen.fare.final_fare,
            "booking confirmed"
        );
        Ok(booking)
    }

    /// Cancel a booking. Revenue already recorded for it is kept.
    pub fn cancel_booking(&self, booking_id: &str) -> Result<Booking> {
        let mut booking = self.require(booking_id)?;
        let previous = booking.status;
        booking.transition_to(BookingStatus::Cancelled, Utc::now())?;
        self.bookings.save(&booking)?;

        tracing::info!(booking_id = %booking.id, from = %previous, "booking cancelled");
        Ok(booking)
    }

    pub fn get_booking(&self, booking_id: &str) -> Result<Option<Booking>> {
        Ok(self.bookings.find_by_id(booking_id)?)
    }

    /// All bookings, newest first
    pub fn all_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.find_all()?)
    }

    pub fn bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        Ok(self.bookings.find_by_user(user_id)?)
    }

    /// The `limit` newest bookings
    pub fn recent_bookings(&self, limit: usize) -> Result<Vec<Booking>> {
        let mut bookings = self.bookings.find_all()?;
        bookings.truncate(limit);
        Ok(bookings)
    }

    pub fn pending_count(&self) -> Result<usize> {
        Ok(self
            .bookings
            .find_all()?
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .count())
    }

    fn require(&self, booking_id: &str) -> Result<Booking> {
        self.bookings
            .find_by_id(booking_id)?
            .ok_or_else(|| BookingServiceError::NotFound(booking_id.to_string()))
    }

    fn price(&self, booking: &Booking) -> Result<Vec<PricedRoute>> {
        Ok(self.pricing.price_trip_in(
            &booking.city,
            &booking.origin,
            &booking.destination,
            &booking.vehicle_type,
        )?)
    }
}
