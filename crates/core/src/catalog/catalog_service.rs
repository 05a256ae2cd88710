use log::{debug, error};
use std::sync::Arc;

use super::catalog_model::{NewVehicle, Vehicle, VehicleEnrichment};
use super::catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing the reference vehicle catalog
pub struct CatalogService {
    catalog_repository: Arc<dyn CatalogRepositoryTrait>,
}

impl CatalogService {
    /// Creates a new CatalogService instance
    pub fn new(catalog_repository: Arc<dyn CatalogRepositoryTrait>) -> Self {
        Self { catalog_repository }
    }
}

#[async_trait::async_trait]
impl CatalogServiceTrait for CatalogService {
    /// Lists the full catalog
    fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.catalog_repository.list()
    }

    /// Retrieves a vehicle by its slug
    fn get_vehicle_by_slug(&self, slug: &str) -> Result<Vehicle> {
        self.catalog_repository.get_by_slug(slug)
    }

    fn find_vehicle_by_name(&self, name: &str) -> Result<Option<Vehicle>> {
        self.catalog_repository.find_by_name(name)
    }

    fn search_by_slug_prefix(&self, prefix: &str) -> Result<Vec<Vehicle>> {
        self.catalog_repository.search_by_slug_prefix(prefix)
    }

    /// Retrieves or registers a provisional vehicle for the given slug.
    async fn ensure_stub(&self, slug: &str, name: &str) -> Result<Vehicle> {
        match self.catalog_repository.get_by_slug(slug) {
            Ok(existing) if existing.name == name => Ok(existing),
            Ok(_) => {
                // Same slug, drifted name: the upsert refreshes the name only.
                self.catalog_repository
                    .upsert_stub(NewVehicle::new_stub(slug, name))
                    .await
            }
            Err(Error::Database(DatabaseError::NotFound(_))) => {
                debug!("Vehicle not found in catalog, registering stub: {}", slug);
                self.catalog_repository
                    .upsert_stub(NewVehicle::new_stub(slug, name))
                    .await
            }
            Err(e) => {
                error!("Error fetching vehicle by slug '{}': {}", slug, e);
                Err(e)
            }
        }
    }

    /// Applies sync-sourced profile data to an existing row.
    async fn apply_enrichment(&self, slug: &str, payload: VehicleEnrichment) -> Result<Vehicle> {
        debug!("Enriching vehicle profile: {}", slug);
        self.catalog_repository.apply_enrichment(slug, payload).await
    }
}
