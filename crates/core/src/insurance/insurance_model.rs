//! Insurance tier domain model.

use serde::{Deserialize, Serialize};

/// A row of the static insurance tier lookup table.
///
/// Seeded at deployment, read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceTier {
    pub id: String,
    pub label: String,
    /// Coverage duration. `None` for lifetime and unknown tiers.
    pub duration_months: Option<i32>,
    pub is_lifetime: bool,
}
