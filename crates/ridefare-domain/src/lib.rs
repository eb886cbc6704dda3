//! Fare domain: tariff tables, pricing services and repository traits

pub mod model;
pub mod repository;
pub mod service;
