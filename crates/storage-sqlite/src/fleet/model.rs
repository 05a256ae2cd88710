//! Database model for fleet entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fleetfolio_core::fleet::{FleetEntry, NewFleetEntry};

/// Database model for owned-vehicle entries
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
#[diesel(table_name = crate::schema::fleet_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FleetEntryDB {
    pub id: String,
    pub user_id: String,
    pub vehicle_slug: String,
    pub insurance_tier_id: Option<String>,
    pub warbond: bool,
    pub loaner: bool,
    pub pledge_id: Option<String>,
    pub pledge_name: Option<String>,
    pub pledge_cost: Option<String>,
    pub pledge_date: Option<String>,
    pub custom_name: Option<String>,
    pub imported_at: NaiveDateTime,
}

// Conversion implementations
impl From<FleetEntryDB> for FleetEntry {
    fn from(db: FleetEntryDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            vehicle_slug: db.vehicle_slug,
            insurance_tier_id: db.insurance_tier_id,
            warbond: db.warbond,
            loaner: db.loaner,
            pledge_id: db.pledge_id,
            pledge_name: db.pledge_name,
            pledge_cost: db.pledge_cost,
            pledge_date: db.pledge_date,
            custom_name: db.custom_name,
            imported_at: db.imported_at,
        }
    }
}

impl From<NewFleetEntry> for FleetEntryDB {
    fn from(domain: NewFleetEntry) -> Self {
        Self {
            // The repository assigns the id at insert time
            id: String::new(),
            user_id: domain.user_id,
            vehicle_slug: domain.vehicle_slug,
            insurance_tier_id: domain.insurance_tier_id,
            warbond: domain.warbond,
            loaner: domain.loaner,
            pledge_id: domain.pledge_id,
            pledge_name: domain.pledge_name,
            pledge_cost: domain.pledge_cost,
            pledge_date: domain.pledge_date,
            custom_name: domain.custom_name,
            imported_at: chrono::Utc::now().naive_utc(),
        }
    }
}
