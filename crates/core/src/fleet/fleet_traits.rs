use super::fleet_model::{FleetEntry, ImportResult, NewFleetEntry};
use crate::errors::Result;

/// Trait defining the contract for fleet service operations.
#[async_trait::async_trait]
pub trait FleetServiceTrait: Send + Sync {
    /// Resolves an import batch against the catalog and atomically replaces
    /// the user's tracked fleet with the result.
    async fn import_fleet(&self, user_id: &str, payload: serde_json::Value)
        -> Result<ImportResult>;
    fn get_fleet(&self, user_id: &str) -> Result<Vec<FleetEntry>>;
}

/// Trait defining the contract for fleet repository operations.
#[async_trait::async_trait]
pub trait FleetRepositoryTrait: Send + Sync {
    fn get_by_user(&self, user_id: &str) -> Result<Vec<FleetEntry>>;
    /// Deletes the user's existing entries and inserts the given set as one
    /// atomic unit. Any failure leaves the prior fleet state fully intact.
    /// Returns the number of inserted entries.
    async fn replace_for_user(&self, user_id: &str, entries: Vec<NewFleetEntry>) -> Result<usize>;
}
