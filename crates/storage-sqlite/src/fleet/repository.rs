use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use fleetfolio_core::fleet::{FleetEntry, FleetRepositoryTrait, NewFleetEntry};
use fleetfolio_core::Result;

use super::model::FleetEntryDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::fleet_entries;

/// Repository for managing fleet entry data in the database
pub struct FleetRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl FleetRepository {
    /// Creates a new FleetRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Retrieves a user's fleet entries in import order
    pub fn get_by_user_impl(&self, user_id: &str) -> Result<Vec<FleetEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let entries_db = fleet_entries::table
            .select(FleetEntryDB::as_select())
            .filter(fleet_entries::user_id.eq(user_id))
            .order((fleet_entries::imported_at.asc(), fleet_entries::id.asc()))
            .load::<FleetEntryDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(entries_db.into_iter().map(FleetEntry::from).collect())
    }
}

#[async_trait]
impl FleetRepositoryTrait for FleetRepository {
    fn get_by_user(&self, user_id: &str) -> Result<Vec<FleetEntry>> {
        self.get_by_user_impl(user_id)
    }

    /// Replaces the user's entire fleet as one atomic unit.
    ///
    /// The delete and every insert run in a single writer job, which the
    /// write actor wraps in one immediate transaction: any failure rolls the
    /// whole batch back and the prior fleet state stays untouched.
    async fn replace_for_user(&self, user_id: &str, entries: Vec<NewFleetEntry>) -> Result<usize> {
        let mut rows: Vec<FleetEntryDB> = Vec::with_capacity(entries.len());
        for entry in entries {
            entry.validate().map_err(fleetfolio_core::Error::from)?;
            let mut row: FleetEntryDB = entry.into();
            row.id = Uuid::new_v4().to_string();
            rows.push(row);
        }

        let user_id_owned = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    fleet_entries::table.filter(fleet_entries::user_id.eq(&user_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                let inserted = diesel::insert_into(fleet_entries::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(inserted)
            })
            .await
    }
}
