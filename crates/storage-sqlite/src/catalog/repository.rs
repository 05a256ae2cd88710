use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use fleetfolio_core::catalog::{
    CatalogRepositoryTrait, NewVehicle, Vehicle, VehicleEnrichment, VehicleStatus,
};
use fleetfolio_core::Result;

use super::model::VehicleDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::vehicles;

/// Repository for managing the reference vehicle catalog in the database
pub struct VehicleRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository instance
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }

    /// Retrieves a vehicle by its slug
    pub fn get_by_slug_impl(&self, slug: &str) -> Result<Vehicle> {
        let mut conn = get_connection(&self.pool)?;

        let result = vehicles::table
            .select(VehicleDB::as_select())
            .find(slug)
            .first::<VehicleDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(result.into())
    }

    /// Lists the full catalog in slug order
    pub fn list_impl(&self) -> Result<Vec<Vehicle>> {
        let mut conn = get_connection(&self.pool)?;

        let results = vehicles::table
            .select(VehicleDB::as_select())
            .order(vehicles::slug.asc())
            .load::<VehicleDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Vehicle::from).collect())
    }

    /// Case-insensitive exact match on the display name
    pub fn find_by_name_impl(&self, name: &str) -> Result<Option<Vehicle>> {
        let mut conn = get_connection(&self.pool)?;

        let needle = name.to_lowercase().replace('\'', "''");

        let result = vehicles::table
            .select(VehicleDB::as_select())
            .filter(diesel::dsl::sql::<diesel::sql_types::Bool>(&format!(
                "LOWER(name) = '{}'",
                needle
            )))
            .order(vehicles::slug.asc())
            .first::<VehicleDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(Vehicle::from))
    }

    /// Lists vehicles whose slug starts with the given prefix
    pub fn search_by_slug_prefix_impl(&self, prefix: &str) -> Result<Vec<Vehicle>> {
        let mut conn = get_connection(&self.pool)?;

        let pattern = format!("{}%", prefix.replace('%', "").replace('_', ""));

        let results = vehicles::table
            .select(VehicleDB::as_select())
            .filter(vehicles::slug.like(pattern))
            .order(vehicles::slug.asc())
            .load::<VehicleDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Vehicle::from).collect())
    }
}

#[async_trait]
impl CatalogRepositoryTrait for VehicleRepository {
    /// Inserts a provisional row, or refreshes the name of an existing one.
    ///
    /// The conflict target is the slug primary key, so re-registering a slug
    /// can never duplicate it, and the update touches only the name and
    /// timestamp: an enriched row keeps its status and spec fields.
    async fn upsert_stub(&self, new_vehicle: NewVehicle) -> Result<Vehicle> {
        new_vehicle.validate().map_err(fleetfolio_core::Error::from)?;
        let vehicle_db: VehicleDB = new_vehicle.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vehicle> {
                let result_db = diesel::insert_into(vehicles::table)
                    .values(&vehicle_db)
                    .on_conflict(vehicles::slug)
                    .do_update()
                    .set((
                        vehicles::name.eq(&vehicle_db.name),
                        vehicles::updated_at.eq(&vehicle_db.updated_at),
                    ))
                    .get_result::<VehicleDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into())
            })
            .await
    }

    /// Applies sync-sourced profile data, promoting the row to ENRICHED
    async fn apply_enrichment(&self, slug: &str, payload: VehicleEnrichment) -> Result<Vehicle> {
        let slug_owned = slug.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vehicle> {
                let existing: VehicleDB = vehicles::table
                    .find(&slug_owned)
                    .first(conn)
                    .map_err(StorageError::from)?;

                let result_db = diesel::update(vehicles::table.find(&slug_owned))
                    .set((
                        vehicles::name.eq(payload.name.unwrap_or(existing.name)),
                        vehicles::manufacturer_code
                            .eq(payload.manufacturer_code.or(existing.manufacturer_code)),
                        vehicles::manufacturer_name
                            .eq(payload.manufacturer_name.or(existing.manufacturer_name)),
                        vehicles::classification
                            .eq(payload.classification.or(existing.classification)),
                        vehicles::focus.eq(payload.focus.or(existing.focus)),
                        vehicles::size.eq(payload.size.or(existing.size)),
                        vehicles::status.eq(VehicleStatus::Enriched.as_db_str()),
                        vehicles::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .get_result::<VehicleDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into())
            })
            .await
    }

    fn get_by_slug(&self, slug: &str) -> Result<Vehicle> {
        self.get_by_slug_impl(slug)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Vehicle>> {
        self.find_by_name_impl(name)
    }

    fn search_by_slug_prefix(&self, prefix: &str) -> Result<Vec<Vehicle>> {
        self.search_by_slug_prefix_impl(prefix)
    }

    fn list(&self) -> Result<Vec<Vehicle>> {
        self.list_impl()
    }
}
