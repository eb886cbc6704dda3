//! Application service layer - pricing, bookings, users, analytics, config

pub mod app;
pub mod config;
pub mod logging;
pub mod repository;
