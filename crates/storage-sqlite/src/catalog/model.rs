//! Database model for catalog vehicles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fleetfolio_core::catalog::{NewVehicle, Vehicle, VehicleStatus};

/// Database model for reference vehicles
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Default,
)]
#[diesel(table_name = crate::schema::vehicles)]
#[diesel(primary_key(slug))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VehicleDB {
    pub slug: String,
    pub name: String,
    pub manufacturer_code: Option<String>,
    pub manufacturer_name: Option<String>,
    pub classification: Option<String>,
    pub focus: Option<String>,
    pub size: Option<String>,
    pub status: String, // Lifecycle stage (stored as string)
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<VehicleDB> for Vehicle {
    fn from(db: VehicleDB) -> Self {
        // Unknown status strings read back as provisional rather than failing
        let status = VehicleStatus::from_db_str(&db.status).unwrap_or_default();

        Self {
            slug: db.slug,
            name: db.name,
            manufacturer_code: db.manufacturer_code,
            manufacturer_name: db.manufacturer_name,
            classification: db.classification,
            focus: db.focus,
            size: db.size,
            status,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewVehicle> for VehicleDB {
    fn from(domain: NewVehicle) -> Self {
        let now = chrono::Utc::now().naive_utc();

        Self {
            slug: domain.slug,
            name: domain.name,
            manufacturer_code: domain.manufacturer_code,
            manufacturer_name: domain.manufacturer_name,
            classification: domain.classification,
            focus: domain.focus,
            size: domain.size,
            status: domain.status.as_db_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
