//! Fleet module - owned-vehicle models, the reconciliation resolver, and traits.

mod candidates;
mod custom_name;
mod fleet_errors;
mod fleet_model;
mod fleet_service;
mod fleet_traits;
mod matcher;

#[cfg(test)]
mod fleet_service_tests;

pub use candidates::{candidate_slugs, compact, slugify};
pub use custom_name::detect_custom_name;
pub use fleet_errors::FleetError;
pub use fleet_model::{FleetEntry, ImportRecord, ImportResult, NewFleetEntry};
pub use fleet_service::FleetService;
pub use fleet_traits::{FleetRepositoryTrait, FleetServiceTrait};
pub use matcher::CatalogSnapshot;
