use super::catalog_model::{NewVehicle, Vehicle, VehicleEnrichment};
use crate::errors::Result;

/// Trait defining the contract for catalog service operations.
#[async_trait::async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>>;
    fn get_vehicle_by_slug(&self, slug: &str) -> Result<Vehicle>;
    /// Case-insensitive exact match on the display name.
    fn find_vehicle_by_name(&self, name: &str) -> Result<Option<Vehicle>>;
    fn search_by_slug_prefix(&self, prefix: &str) -> Result<Vec<Vehicle>>;
    /// Ensures a provisional vehicle exists for the given slug. Idempotent:
    /// re-registering the same slug only refreshes the name.
    async fn ensure_stub(&self, slug: &str, name: &str) -> Result<Vehicle>;
    /// Applies sync-sourced profile data to an existing row, promoting it to
    /// `ENRICHED`.
    async fn apply_enrichment(&self, slug: &str, payload: VehicleEnrichment) -> Result<Vehicle>;
}

/// Trait defining the contract for catalog repository operations.
#[async_trait::async_trait]
pub trait CatalogRepositoryTrait: Send + Sync {
    /// Inserts a provisional row, or refreshes the name of an existing one.
    /// Never duplicates a slug and never downgrades an enriched row.
    async fn upsert_stub(&self, new_vehicle: NewVehicle) -> Result<Vehicle>;
    async fn apply_enrichment(&self, slug: &str, payload: VehicleEnrichment) -> Result<Vehicle>;
    fn get_by_slug(&self, slug: &str) -> Result<Vehicle>;
    /// Case-insensitive exact match on the display name.
    fn find_by_name(&self, name: &str) -> Result<Option<Vehicle>>;
    fn search_by_slug_prefix(&self, prefix: &str) -> Result<Vec<Vehicle>>;
    /// Lists the full catalog in slug order.
    fn list(&self) -> Result<Vec<Vehicle>>;
}
