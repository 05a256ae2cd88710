//! Fleet domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::fleet_errors::FleetError;

/// Domain model representing one owned vehicle in a user's tracked fleet.
///
/// The entire per-user set is replaced as a unit on every import; individual
/// rows are never diffed or patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FleetEntry {
    pub id: String,
    pub user_id: String,
    /// References exactly one catalog vehicle. Always resolvable: unmatched
    /// imports register a provisional catalog row before insertion.
    pub vehicle_slug: String,

    pub insurance_tier_id: Option<String>,
    pub warbond: bool,
    pub loaner: bool,

    // Pledge metadata, passed through verbatim from the source
    pub pledge_id: Option<String>,
    pub pledge_name: Option<String>,
    pub pledge_cost: Option<String>,
    pub pledge_date: Option<String>,

    /// User nickname, only when meaningfully different from the stock name.
    pub custom_name: Option<String>,

    pub imported_at: NaiveDateTime,
}

/// Payload for inserting a fleet entry. The repository assigns the id and
/// import timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewFleetEntry {
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
}

impl NewFleetEntry {
    pub fn validate(&self) -> std::result::Result<(), FleetError> {
        if self.user_id.trim().is_empty() {
            return Err(FleetError::InvalidData(
                "User ID cannot be empty".to_string(),
            ));
        }
        if self.vehicle_slug.trim().is_empty() {
            return Err(FleetError::InvalidData(
                "Vehicle slug cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One raw record of an import batch, as exported by external hangar tools.
///
/// Transient input: never persisted verbatim. Field naming drifts between
/// source versions, hence the aliases; every field is optional at the serde
/// level and validated afterwards.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    #[serde(default, alias = "ship_code", alias = "code")]
    pub ship_code: String,
    #[serde(default, alias = "ship_name")]
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    /// Free-text insurance descriptor, e.g. "72 Month Insurance".
    #[serde(default, alias = "insurance_type")]
    pub insurance: Option<String>,
    /// Explicit lifetime insurance flag. Authoritative over the descriptor.
    #[serde(default)]
    pub lti: bool,
    #[serde(default)]
    pub warbond: bool,
    #[serde(default)]
    pub loaner: bool,
    #[serde(default, alias = "pledge_id")]
    pub pledge_id: Option<String>,
    #[serde(default, alias = "pledge_name")]
    pub pledge_name: Option<String>,
    #[serde(default, alias = "pledge_cost")]
    pub pledge_cost: Option<String>,
    #[serde(default, alias = "pledge_date")]
    pub pledge_date: Option<String>,
    #[serde(default, alias = "custom_name")]
    pub nickname: Option<String>,
}

impl ImportRecord {
    /// A record with neither a ship code nor a display name yields no slug
    /// candidates and cannot be resolved or stubbed.
    pub fn has_identity(&self) -> bool {
        !self.ship_code.trim().is_empty() || !self.name.trim().is_empty()
    }

    /// The name used for stub registration and custom-name comparison,
    /// falling back to the ship code when the source omitted a display name.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.ship_code
        } else {
            &self.name
        }
    }
}

/// Outcome of a reconciliation, consumed by the reporting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub imported: usize,
    pub total: usize,
    pub message: String,
}

impl ImportResult {
    pub fn new(imported: usize, total: usize) -> Self {
        Self {
            imported,
            total,
            message: format!("{} of {} entries imported", imported, total),
        }
    }
}
