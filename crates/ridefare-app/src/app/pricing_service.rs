//! Pricing Service - the trip pricing entry point
//!
//! Flow for one request:
//! 1. Check the vehicle type against the tariff table
//! 2. Resolve the distance (geocoder, then fallback table)
//! 3. Read current weather/traffic for the city
//! 4. Suggest the main and local routes
//! 5. Price each route

use ridefare_domain::model::PricingConfig;
use ridefare_domain::service::{
    extract_city_name, ConditionsProvider, DistancePolicy, DistanceSource, FareCalculator,
    FallbackReason, FixedConditions, Geocoder, RouteSuggester,
};
use ridefare_infra::KnownPlacesGeocoder;
use ridefare_types::{Conditions, PricedRoute, PricingError};

/// Priced routes for one vehicle type
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleQuote {
    pub vehicle_type: String,
    pub routes: Vec<PricedRoute>,
}

pub struct PricingService {
    pricing: PricingConfig,
    geocoder: Box<dyn Geocoder>,
    conditions: Box<dyn ConditionsProvider>,
}

impl PricingService {
    pub fn new(
        pricing: PricingConfig,
        geocoder: Box<dyn Geocoder>,
        conditions: Box<dyn ConditionsProvider>,
    ) -> Self {
        Self {
            pricing,
            geocoder,
            conditions,
        }
    }

    /// Geocode against the configured known places; clear weather, moderate traffic
    pub fn offline(pricing: PricingConfig) -> Self {
        let geocoder = KnownPlacesGeocoder::new(&pricing.places);
        Self::new(
            pricing,
            Box::new(geocoder),
            Box::new(FixedConditions::default()),
        )
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Price a trip; the city for condition lookup is taken from the origin
    pub fn price_trip(
        &self,
        origin: &str,
        destination: &str,
        vehicle_type: &str,
    ) -> Result<Vec<PricedRoute>, PricingError> {
        self.price_trip_in(extract_city_name(origin), origin, destination, vehicle_type)
    }

    /// Price a trip inside a known city. Routes come back main first, local second.
    pub fn price_trip_in(
        &self,
        city: &str,
        origin: &str,
        destination: &str,
        vehicle_type: &str,
    ) -> Result<Vec<PricedRoute>, PricingError> {
        self.ensure_vehicle(vehicle_type)?;
        let distance_km = self.resolve_distance(origin, destination)?;
        let conditions = self.conditions.current_conditions(city);
        tracing::debug!(
            city,
            weather = %conditions.weather,
            traffic = %conditions.traffic,
            "current conditions"
        );
        self.price_distance(distance_km, vehicle_type, &conditions)
    }

    /// Quotes for every vehicle type, cheapest vehicle first
    pub fn estimate_all_vehicles(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<VehicleQuote>, PricingError> {
        let distance_km = self.resolve_distance(origin, destination)?;
        let conditions = self
            .conditions
            .current_conditions(extract_city_name(origin));

        let mut quotes = self
            .pricing
            .tariffs
            .type_ids()
            .into_iter()
            .map(|vehicle_type| {
                Ok(VehicleQuote {
                    vehicle_type: vehicle_type.to_string(),
                    routes: self.price_distance(distance_km, vehicle_type, &conditions)?,
                })
            })
            .collect::<Result<Vec<_>, PricingError>>()?;

        quotes.sort_by_key(|q| cheapest(&q.routes).map(|r| r.fare.final_fare));
        Ok(quotes)
    }

    /// Suggest and price both routes for a known distance
    pub fn price_distance(
        &self,
        distance_km: f64,
        vehicle_type: &str,
        conditions: &Conditions,
    ) -> Result<Vec<PricedRoute>, PricingError> {
        let calculator = FareCalculator::new(
            &self.pricing.tariffs,
            &self.pricing.weather,
            &self.pricing.traffic,
        );
        let routes = RouteSuggester::new(self.pricing.routes).suggest(distance_km)?;

        routes
            .into_iter()
            .map(|route| {
                let fare = calculator.compute(
                    route.distance_km,
                    vehicle_type,
                    &conditions.weather,
                    &conditions.traffic,
                )?;
                Ok(PricedRoute { route, fare })
            })
            .collect()
    }

    /// Distance between two places, logging when the fallback table answered
    pub fn resolve_distance(&self, origin: &str, destination: &str) -> Result<f64, PricingError> {
        let policy = DistancePolicy::new(self.geocoder.as_ref(), &self.pricing.fallback_distances);
        let resolved = policy.resolve(origin, destination).map_err(|e| {
            tracing::warn!(origin, destination, "no distance available");
            e
        })?;

        match resolved.source {
            DistanceSource::Geocoded => {
                tracing::debug!(origin, destination, km = resolved.distance_km, "geocoded distance");
            }
            DistanceSource::Fallback(FallbackReason::Geocode(ref err)) => {
                tracing::warn!(origin, destination, error = %err, km = resolved.distance_km, "geocoding failed, using fallback distance");
            }
            DistanceSource::Fallback(FallbackReason::Implausible(km)) => {
                tracing::warn!(origin, destination, geocoded_km = km, km = resolved.distance_km, "implausible geocoded distance, using fallback distance");
            }
        }
        Ok(resolved.distance_km)
    }

    fn ensure_vehicle(&self, vehicle_type: &str) -> Result<(), PricingError> {
        if self.pricing.tariffs.contains(vehicle_type) {
            Ok(())
        } else {
            Err(PricingError::InvalidVehicleType(vehicle_type.to_string()))
        }
    }
}

/// Lowest final fare; first route on ties
pub fn cheapest(routes: &[PricedRoute]) -> Option<&PricedRoute> {
    routes
        .iter()
        .reduce(|best, r| if r.fare.final_fare < best.fare.final_fare { r } else { best })
}

/// Order by final fare, keeping main before local on ties
pub fn sort_by_fare(routes: &mut [PricedRoute]) {
    routes.sort_by_key(|r| r.fare.final_fare);
}
