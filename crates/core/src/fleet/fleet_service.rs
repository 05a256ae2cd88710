use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

use super::candidates::candidate_slugs;
use super::custom_name::detect_custom_name;
use super::fleet_errors::FleetError;
use super::fleet_model::{FleetEntry, ImportRecord, ImportResult, NewFleetEntry};
use super::fleet_traits::{FleetRepositoryTrait, FleetServiceTrait};
use super::matcher::CatalogSnapshot;
use crate::catalog::CatalogServiceTrait;
use crate::insurance::{classify_insurance, InsuranceTierRepositoryTrait};
use crate::Result;

/// Service for reconciling a user's tracked fleet against import batches
pub struct FleetService {
    fleet_repository: Arc<dyn FleetRepositoryTrait>,
    catalog_service: Arc<dyn CatalogServiceTrait>,
    insurance_repository: Arc<dyn InsuranceTierRepositoryTrait>,
}

/// One record resolved against the catalog, plus the stub registration it
/// requires when the catalog had no match.
struct ResolvedRecord {
    entry: NewFleetEntry,
    stub: Option<(String, String)>,
}

impl FleetService {
    /// Creates a new FleetService instance with injected dependencies
    pub fn new(
        fleet_repository: Arc<dyn FleetRepositoryTrait>,
        catalog_service: Arc<dyn CatalogServiceTrait>,
        insurance_repository: Arc<dyn InsuranceTierRepositoryTrait>,
    ) -> Self {
        Self {
            fleet_repository,
            catalog_service,
            insurance_repository,
        }
    }

    /// Resolves one raw record. Pure over the snapshot: no side effects.
    /// Returns `None` for structurally invalid records.
    fn resolve_record(
        &self,
        user_id: &str,
        raw: &serde_json::Value,
        snapshot: &CatalogSnapshot,
        seeded_tiers: &HashSet<String>,
    ) -> Option<ResolvedRecord> {
        let record: ImportRecord = match serde_json::from_value(raw.clone()) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed import record: {}", e);
                return None;
            }
        };
        if !record.has_identity() {
            warn!("Skipping import record with no ship code or name");
            return None;
        }

        let candidates = candidate_slugs(&record.ship_code, &record.name, record.alias.as_deref());
        if candidates.is_empty() {
            warn!(
                "Skipping import record '{}': no usable slug candidates",
                record.display_name()
            );
            return None;
        }

        let (vehicle_slug, stub) = match snapshot.resolve(&candidates, &record.name) {
            Some(slug) => (slug, None),
            None => {
                // Unresolvable entities never hard-fail: register a
                // provisional catalog row under the primary candidate.
                let stub_slug = candidates[0].clone();
                let stub_name = record.display_name().to_string();
                debug!(
                    "No catalog match for '{}', falling back to stub '{}'",
                    record.display_name(),
                    stub_slug
                );
                (stub_slug.clone(), Some((stub_slug, stub_name)))
            }
        };

        let tier_id = classify_insurance(record.insurance.as_deref(), record.lti);
        let insurance_tier_id = if seeded_tiers.contains(tier_id) {
            Some(tier_id.to_string())
        } else {
            warn!("Insurance tier '{}' is not seeded; leaving entry untiered", tier_id);
            None
        };

        let custom_name = detect_custom_name(
            record.nickname.as_deref(),
            &record.ship_code,
            record.display_name(),
        );

        Some(ResolvedRecord {
            entry: NewFleetEntry {
                user_id: user_id.to_string(),
                vehicle_slug,
                insurance_tier_id,
                warbond: record.warbond,
                loaner: record.loaner,
                pledge_id: record.pledge_id,
                pledge_name: record.pledge_name,
                pledge_cost: record.pledge_cost,
                pledge_date: record.pledge_date,
                custom_name,
            },
            stub,
        })
    }
}

#[async_trait::async_trait]
impl FleetServiceTrait for FleetService {
    async fn import_fleet(
        &self,
        user_id: &str,
        payload: serde_json::Value,
    ) -> Result<ImportResult> {
        // Top-level shape is the only hard input failure, checked before any
        // processing or side effect.
        let records = payload.as_array().ok_or_else(|| {
            FleetError::InvalidPayload("expected a sequence of import records".to_string())
        })?;
        let total = records.len();

        let vehicles = self.catalog_service.list_vehicles()?;
        let snapshot = CatalogSnapshot::new(&vehicles);
        let seeded_tiers: HashSet<String> = self
            .insurance_repository
            .list()?
            .into_iter()
            .map(|tier| tier.id)
            .collect();

        let mut entries: Vec<NewFleetEntry> = Vec::with_capacity(total);
        let mut pending_stubs: Vec<(String, String)> = Vec::new();
        let mut queued_stub_slugs: HashSet<String> = HashSet::new();

        for raw in records {
            let Some(resolved) = self.resolve_record(user_id, raw, &snapshot, &seeded_tiers)
            else {
                continue;
            };
            if let Some((slug, name)) = resolved.stub {
                // Two records falling back to the same unseen slug must
                // produce a single stub registration.
                if queued_stub_slugs.insert(slug.clone()) {
                    pending_stubs.push((slug, name));
                }
            }
            entries.push(resolved.entry);
        }

        // Stub registrations run first: the insert phase requires every
        // referenced catalog row to exist.
        for (slug, name) in &pending_stubs {
            self.catalog_service.ensure_stub(slug, name).await?;
        }

        let imported = self
            .fleet_repository
            .replace_for_user(user_id, entries)
            .await?;

        debug!(
            "Reconciled fleet for user {}: {} of {} records imported, {} stubs registered",
            user_id,
            imported,
            total,
            pending_stubs.len()
        );

        Ok(ImportResult::new(imported, total))
    }

    fn get_fleet(&self, user_id: &str) -> Result<Vec<FleetEntry>> {
        self.fleet_repository.get_by_user(user_id)
    }
}
