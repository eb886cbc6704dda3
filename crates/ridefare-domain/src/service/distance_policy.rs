//! Distance resolution with static-table fallback
//!
//! The geocoder is tried first. Its distance is rejected when implausible
//! for the pair of places, and any failure or rejection falls through to
//! the fallback table. Only when the table has no entry does resolution fail.

use thiserror::Error;

use ridefare_types::PricingError;

use crate::model::{Coordinates, FallbackDistanceTable};

/// Longest plausible trip inside a single city
pub const MAX_SAME_CITY_KM: f64 = 50.0;
/// Shorter geocoded distances inside a city are treated as a bad match
pub const MIN_SAME_CITY_KM: f64 = 0.5;
/// Shorter geocoded distances between different cities are treated as a bad match
pub const MIN_INTER_CITY_KM: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    #[error("Place could not be resolved: {0}")]
    NotFound(String),

    #[error("Geocoding service unavailable: {0}")]
    Unavailable(String),

    #[error("Geocoding quota exceeded")]
    QuotaExceeded,
}

/// Place name -> coordinates collaborator
pub trait Geocoder {
    fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError>;
}

/// Why the fallback table was used
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    Geocode(GeocodeError),
    Implausible(f64),
}

/// Where a resolved distance came from
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceSource {
    Geocoded,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDistance {
    pub distance_km: f64,
    pub source: DistanceSource,
}

pub struct DistancePolicy<'a, G: Geocoder + ?Sized> {
    geocoder: &'a G,
    fallback: &'a FallbackDistanceTable,
}

impl<'a, G: Geocoder + ?Sized> DistancePolicy<'a, G> {
    pub fn new(geocoder: &'a G, fallback: &'a FallbackDistanceTable) -> Self {
        Self { geocoder, fallback }
    }

    pub fn resolve_distance(&self, origin: &str, destination: &str) -> Result<f64, PricingError> {
        self.resolve(origin, destination).map(|r| r.distance_km)
    }

    /// Resolve a distance and report which source produced it
    pub fn resolve(&self, origin: &str, destination: &str) -> Result<ResolvedDistance, PricingError> {
        let reason = match self.geocoded_distance(origin, destination) {
            Ok(km) if is_plausible(km, origin, destination) => {
                return Ok(ResolvedDistance {
                    distance_km: km,
                    source: DistanceSource::Geocoded,
                });
            }
            Ok(km) => FallbackReason::Implausible(km),
            Err(e) => FallbackReason::Geocode(e),
        };

        self.fallback
            .lookup(origin, destination)
            .map(|distance_km| ResolvedDistance {
                distance_km,
                source: DistanceSource::Fallback(reason),
            })
            .ok_or_else(|| PricingError::DistanceUnavailable {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
    }

    fn geocoded_distance(&self, origin: &str, destination: &str) -> Result<f64, GeocodeError> {
        let from = self.geocoder.geocode(origin)?;
        let to = self.geocoder.geocode(destination)?;
        Ok(round_one_decimal(from.haversine_km(&to)))
    }
}

/// City part of a place string: the last comma-separated segment
pub fn extract_city_name(location: &str) -> &str {
    location.rsplit(',').next().unwrap_or(location).trim()
}

fn is_plausible(distance_km: f64, origin: &str, destination: &str) -> bool {
    if !distance_km.is_finite() {
        return false;
    }
    let same_city = extract_city_name(origin).eq_ignore_ascii_case(extract_city_name(destination));
    if same_city {
        (MIN_SAME_CITY_KM..=MAX_SAME_CITY_KM).contains(&distance_km)
    } else {
        distance_km >= MIN_INTER_CITY_KM
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
