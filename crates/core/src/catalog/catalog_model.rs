//! Reference vehicle domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Lifecycle stage of a reference vehicle.
///
/// Catalog rows are created in one of two ways: the external game-data sync
/// writes fully populated entries, and the import resolver registers minimal
/// placeholders for vehicles it cannot match. The stage is tracked explicitly
/// so downstream consumers never have to infer it from missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    /// Minimal placeholder (slug + name only), awaiting enrichment.
    #[default]
    Provisional,
    /// Fully populated from a game-data source.
    Enriched,
}

impl VehicleStatus {
    /// Returns the database string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            VehicleStatus::Provisional => "PROVISIONAL",
            VehicleStatus::Enriched => "ENRICHED",
        }
    }

    /// Parses a vehicle status from its database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "PROVISIONAL" => Some(VehicleStatus::Provisional),
            "ENRICHED" => Some(VehicleStatus::Enriched),
            _ => None,
        }
    }
}

/// Domain model representing a reference vehicle in the catalog.
///
/// The slug is the canonical identity: globally unique and immutable once
/// assigned. Rows are never deleted, only enriched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub slug: String,
    pub name: String,

    // Manufacturer/spec fields (NULL until enriched)
    pub manufacturer_code: Option<String>,
    pub manufacturer_name: Option<String>,
    pub classification: Option<String>,
    pub focus: Option<String>,
    pub size: Option<String>,

    pub status: VehicleStatus,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Vehicle {
    /// A provisional row is a valid, queryable entity; its incompleteness is
    /// not an error state.
    pub fn is_provisional(&self) -> bool {
        self.status == VehicleStatus::Provisional
    }
}

/// Payload for creating a catalog row.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub slug: String,
    pub name: String,
    pub manufacturer_code: Option<String>,
    pub manufacturer_name: Option<String>,
    pub classification: Option<String>,
    pub focus: Option<String>,
    pub size: Option<String>,
    pub status: VehicleStatus,
}

impl NewVehicle {
    /// Builds a minimal provisional entry: slug + name, everything else at
    /// defaults.
    pub fn new_stub(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            status: VehicleStatus::Provisional,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.slug.trim().is_empty() {
            return Err(ValidationError::MissingField("slug".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        Ok(())
    }
}

/// Enrichment payload applied by the game-data sync.
///
/// Enrichment promotes a row to `ENRICHED` and fills spec fields. It never
/// changes the slug and never deletes the row.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VehicleEnrichment {
    pub name: Option<String>,
    pub manufacturer_code: Option<String>,
    pub manufacturer_name: Option<String>,
    pub classification: Option<String>,
    pub focus: Option<String>,
    pub size: Option<String>,
}
