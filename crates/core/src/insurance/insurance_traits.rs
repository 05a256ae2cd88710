use super::insurance_model::InsuranceTier;
use crate::errors::Result;

/// Trait defining the contract for insurance tier lookups.
///
/// The tier table is pre-seeded by migration; there are no write operations.
pub trait InsuranceTierRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<InsuranceTier>>;
    fn get_by_id(&self, tier_id: &str) -> Result<InsuranceTier>;
}
