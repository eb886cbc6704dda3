//! Application use cases

pub mod analytics_service;
pub mod booking_service;
pub mod pricing_service;
pub mod user_service;

pub use analytics_service::{AnalyticsService, Dashboard, RouteAnalytics};
pub use booking_service::{BookingService, BookingServiceError};
pub use pricing_service::{cheapest, sort_by_fare, PricingService, VehicleQuote};
pub use user_service::{NewUser, UserService, UserServiceError};
