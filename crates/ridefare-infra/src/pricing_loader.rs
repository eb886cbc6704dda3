//! Pricing configuration loader from TOML
//!
//! Expected layout:
//!
//! ```toml
//! default_vehicle = "car"
//!
//! [vehicles.car]
//! display_name = "Car"
//! base_fare = 40.0
//! rate_per_km = 12.0
//! capacity = 4
//!
//! [weather]
//! clear = 1.0
//!
//! [traffic]
//! light = 1.0
//!
//! [routes]
//! local_distance_factor = 0.9
//!
//! [[fallback_distances]]
//! origin = "Mumbai"
//! destination = "Pune"
//! distance_km = 150.0
//!
//! [[places]]
//! name = "mumbai"
//! lat = 19.076
//! lng = 72.8777
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ridefare_domain::model::{
    ConditionTable, DistanceEntry, FallbackDistanceTable, KnownPlace, PricingConfig,
    RouteFactors, TariffTable, VehicleProfile,
};
use ridefare_types::{ConfigError, Error, Money, Result};

/// Built-in tables shipped with the crate
pub const DEFAULT_PRICING_TOML: &str = include_str!("../data/pricing.toml");

/// Container for parsing pricing.toml
#[derive(Debug, Deserialize)]
struct PricingFile {
    default_vehicle: String,
    vehicles: BTreeMap<String, VehicleEntry>,
    weather: BTreeMap<String, f64>,
    traffic: BTreeMap<String, f64>,
    #[serde(default)]
    routes: RouteFactors,
    #[serde(default)]
    fallback_distances: Vec<DistanceEntry>,
    #[serde(default)]
    places: Vec<KnownPlace>,
}

#[derive(Debug, Deserialize)]
struct VehicleEntry {
    display_name: String,
    #[serde(default)]
    icon: String,
    base_fare: Money,
    rate_per_km: Money,
    capacity: u32,
}

pub struct PricingLoader;

impl PricingLoader {
    /// Load and validate pricing tables from a TOML file
    pub fn load_from_file(path: &Path) -> Result<PricingConfig> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read pricing file {}: {}",
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), "loading pricing tables");
        Self::load_from_str(&content)
    }

    /// Load and validate pricing tables from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<PricingConfig> {
        let file: PricingFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse pricing TOML: {}",
                e
            )))
        })?;

        let config = PricingConfig {
            tariffs: TariffTable::new(file.vehicles.into_iter().map(|(type_id, v)| {
                VehicleProfile {
                    type_id,
                    base_fare: v.base_fare,
                    rate_per_km: v.rate_per_km,
                    capacity: v.capacity,
                    display_name: v.display_name,
                    icon: v.icon,
                }
            })),
            weather: file.weather.into_iter().collect::<ConditionTable>(),
            traffic: file.traffic.into_iter().collect::<ConditionTable>(),
            routes: file.routes,
            fallback_distances: FallbackDistanceTable::new(file.fallback_distances),
            places: file.places,
            default_vehicle: file.default_vehicle,
        };

        config.validate()?;
        Ok(config)
    }

    /// The built-in tables
    pub fn load_default() -> Result<PricingConfig> {
        Self::load_from_str(DEFAULT_PRICING_TOML)
    }
}
