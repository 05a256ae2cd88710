//! Catalog module - reference vehicle models, services, and traits.

mod catalog_model;
mod catalog_service;
mod catalog_traits;

#[cfg(test)]
mod catalog_model_tests;

pub use catalog_model::{NewVehicle, Vehicle, VehicleEnrichment, VehicleStatus};
pub use catalog_service::CatalogService;
pub use catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
