//! Database model for insurance tiers.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fleetfolio_core::insurance::InsuranceTier;

/// Database model for the seeded insurance tier lookup table
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::insurance_tiers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InsuranceTierDB {
    pub id: String,
    pub label: String,
    pub duration_months: Option<i32>,
    pub is_lifetime: bool,
}

impl From<InsuranceTierDB> for InsuranceTier {
    fn from(db: InsuranceTierDB) -> Self {
        Self {
            id: db.id,
            label: db.label,
            duration_months: db.duration_months,
            is_lifetime: db.is_lifetime,
        }
    }
}
