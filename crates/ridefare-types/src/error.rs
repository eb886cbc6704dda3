//! Error types for ridefare

use thiserror::Error;

use crate::BookingStatus;

/// Errors raised while pricing a trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Unknown vehicle type: {0}")]
    InvalidVehicleType(String),

    #[error("Invalid distance: {0} km")]
    InvalidDistance(f64),

    #[error("No distance available from {origin} to {destination}")]
    DistanceUnavailable { origin: String, destination: String },

    #[error("Fare for {0} km is too large to represent")]
    FareOutOfRange(f64),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Persistence-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    Duplicate(String),

    #[error("Booking {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Store data corrupted: {0}")]
    Corrupted(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

pub type Result<T> = std::result::Result<T, Error>;
