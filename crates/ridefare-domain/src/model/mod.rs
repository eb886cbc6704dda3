//! Domain model types

pub mod condition;
pub mod distance_table;
pub mod place;
pub mod pricing;
pub mod route_factors;
pub mod vehicle;

pub use condition::{ConditionFactor, ConditionTable};
pub use distance_table::{DistanceEntry, FallbackDistanceTable};
pub use place::{Coordinates, KnownPlace};
pub use pricing::PricingConfig;
pub use route_factors::RouteFactors;
pub use vehicle::{TariffTable, VehicleProfile};
