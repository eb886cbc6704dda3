//! Distance and travel-time factors for route suggestions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteFactors {
    /// Local-road distance as a fraction of the main-road distance (< 1)
    pub local_distance_factor: f64,
    /// Travel time on main roads in traffic
    pub minutes_per_km_in_traffic: f64,
    /// Travel time on local roads without traffic
    pub minutes_per_km_no_traffic: f64,
}

impl Default for RouteFactors {
    fn default() -> Self {
        Self {
            local_distance_factor: 0.9,
            minutes_per_km_in_traffic: 2.2,
            minutes_per_km_no_traffic: 1.5,
        }
    }
}
