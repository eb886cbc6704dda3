//! Infrastructure layer - config loaders, geocoder, persistence implementations

pub mod distance_csv;
pub mod geocoder;
pub mod persistence;
pub mod pricing_loader;

pub use geocoder::KnownPlacesGeocoder;
pub use pricing_loader::PricingLoader;
