//! Vehicle tariff definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use ridefare_types::Money;

/// Tariff and display data for one vehicle class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Stable key (e.g., "bike", "car")
    pub type_id: String,
    /// Flat amount charged on every trip
    pub base_fare: Money,
    /// Charged per kilometre travelled
    pub rate_per_km: Money,
    /// Passenger seats
    pub capacity: u32,
    pub display_name: String,
    #[serde(default)]
    pub icon: String,
}

/// Vehicle type -> tariff lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TariffTable {
    profiles: BTreeMap<String, VehicleProfile>,
}

impl TariffTable {
    pub fn new(profiles: impl IntoIterator<Item = VehicleProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|p| (p.type_id.clone(), p))
                .collect(),
        }
    }

    pub fn get(&self, type_id: &str) -> Option<&VehicleProfile> {
        self.profiles.get(type_id)
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.profiles.contains_key(type_id)
    }

    /// Profiles ordered by type id
    pub fn iter(&self) -> impl Iterator<Item = &VehicleProfile> {
        self.profiles.values()
    }

    pub fn type_ids(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car() -> VehicleProfile {
        VehicleProfile {
            type_id: "car".to_string(),
            base_fare: Money::from_major(40.0),
            rate_per_km: Money::from_major(12.0),
            capacity: 4,
            display_name: "Car".to_string(),
            icon: "🚗".to_string(),
        }
    }

    #[test]
    fn test_lookup() {
        let table = TariffTable::new([car()]);
        assert!(table.contains("car"));
        assert_eq!(table.get("car").unwrap().capacity, 4);
        assert!(table.get("jet").is_none());
        assert_eq!(table.type_ids(), vec!["car"]);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let mut cheaper = car();
        cheaper.base_fare = Money::from_major(30.0);
        let table = TariffTable::new([car(), cheaper]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("car").unwrap().base_fare.minor(), 3000);
    }
}
