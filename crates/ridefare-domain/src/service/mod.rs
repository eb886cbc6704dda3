//! Domain services

pub mod conditions;
pub mod distance_policy;
pub mod fare_calculator;
pub mod place_validation;
pub mod revenue_report;
pub mod route_suggester;

pub use conditions::{ConditionsProvider, FixedConditions};
pub use distance_policy::{
    extract_city_name, DistancePolicy, DistanceSource, FallbackReason, GeocodeError, Geocoder,
    ResolvedDistance,
};
pub use fare_calculator::{calculate_fare_explicit, split_fare, FareCalculator, DRIVER_SHARE};
pub use place_validation::{city_suggestions, KeywordPlaceValidator, PlaceValidator};
pub use revenue_report::{generate_revenue_report, top_routes, vehicle_breakdown, VehicleStats};
pub use route_suggester::RouteSuggester;
