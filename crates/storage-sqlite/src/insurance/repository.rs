use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use fleetfolio_core::insurance::{InsuranceTier, InsuranceTierRepositoryTrait};
use fleetfolio_core::Result;

use super::model::InsuranceTierDB;
use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::insurance_tiers;

/// Repository for the read-only insurance tier lookup table.
///
/// Rows are seeded by migration; there is no write path, so no writer handle.
pub struct InsuranceTierRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl InsuranceTierRepository {
    /// Creates a new InsuranceTierRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl InsuranceTierRepositoryTrait for InsuranceTierRepository {
    fn list(&self) -> Result<Vec<InsuranceTier>> {
        let mut conn = get_connection(&self.pool)?;

        let results = insurance_tiers::table
            .select(InsuranceTierDB::as_select())
            .order(insurance_tiers::id.asc())
            .load::<InsuranceTierDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(InsuranceTier::from).collect())
    }

    fn get_by_id(&self, tier_id: &str) -> Result<InsuranceTier> {
        let mut conn = get_connection(&self.pool)?;

        let result = insurance_tiers::table
            .select(InsuranceTierDB::as_select())
            .find(tier_id)
            .first::<InsuranceTierDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(result.into())
    }
}
