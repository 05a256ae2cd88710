#[cfg(test)]
mod tests {
    use crate::catalog::{
        CatalogServiceTrait, NewVehicle, Vehicle, VehicleEnrichment, VehicleStatus,
    };
    use crate::errors::{DatabaseError, Error, Result};
    use crate::fleet::{
        FleetEntry, FleetRepositoryTrait, FleetService, FleetServiceTrait, NewFleetEntry,
    };
    use crate::insurance::{InsuranceTier, InsuranceTierRepositoryTrait, ALL_TIERS, TIER_LTI};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock CatalogService ---
    struct MockCatalogService {
        vehicles: Arc<Mutex<Vec<Vehicle>>>,
        stub_calls: AtomicUsize,
    }

    impl MockCatalogService {
        fn new(vehicles: Vec<Vehicle>) -> Self {
            Self {
                vehicles: Arc::new(Mutex::new(vehicles)),
                stub_calls: AtomicUsize::new(0),
            }
        }

        fn vehicle(slug: &str, name: &str) -> Vehicle {
            Vehicle {
                slug: slug.to_string(),
                name: name.to_string(),
                status: VehicleStatus::Enriched,
                ..Default::default()
            }
        }

        fn stub_call_count(&self) -> usize {
            self.stub_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogServiceTrait for MockCatalogService {
        fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
            Ok(self.vehicles.lock().unwrap().clone())
        }

        fn get_vehicle_by_slug(&self, slug: &str) -> Result<Vehicle> {
            self.vehicles
                .lock()
                .unwrap()
                .iter()
                .find(|v| v.slug == slug)
                .cloned()
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(slug.to_string())))
        }

        fn find_vehicle_by_name(&self, name: &str) -> Result<Option<Vehicle>> {
            let needle = name.to_lowercase();
            Ok(self
                .vehicles
                .lock()
                .unwrap()
                .iter()
                .find(|v| v.name.to_lowercase() == needle)
                .cloned())
        }

        fn search_by_slug_prefix(&self, prefix: &str) -> Result<Vec<Vehicle>> {
            Ok(self
                .vehicles
                .lock()
                .unwrap()
                .iter()
                .filter(|v| v.slug.starts_with(prefix))
                .cloned()
                .collect())
        }

        async fn ensure_stub(&self, slug: &str, name: &str) -> Result<Vehicle> {
            self.stub_calls.fetch_add(1, Ordering::SeqCst);
            let mut vehicles = self.vehicles.lock().unwrap();
            if let Some(existing) = vehicles.iter_mut().find(|v| v.slug == slug) {
                existing.name = name.to_string();
                return Ok(existing.clone());
            }
            let stub = NewVehicle::new_stub(slug, name);
            let vehicle = Vehicle {
                slug: stub.slug,
                name: stub.name,
                status: VehicleStatus::Provisional,
                ..Default::default()
            };
            vehicles.push(vehicle.clone());
            Ok(vehicle)
        }

        async fn apply_enrichment(
            &self,
            _slug: &str,
            _payload: VehicleEnrichment,
        ) -> Result<Vehicle> {
            unimplemented!()
        }
    }

    // --- Mock FleetRepository ---
    struct MockFleetRepository {
        entries: Arc<Mutex<Vec<FleetEntry>>>,
        fail_next_replace: AtomicBool,
    }

    impl MockFleetRepository {
        fn new() -> Self {
            Self {
                entries: Arc::new(Mutex::new(Vec::new())),
                fail_next_replace: AtomicBool::new(false),
            }
        }

        fn fail_next_replace(&self) {
            self.fail_next_replace.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl FleetRepositoryTrait for MockFleetRepository {
        fn get_by_user(&self, user_id: &str) -> Result<Vec<FleetEntry>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn replace_for_user(
            &self,
            user_id: &str,
            new_entries: Vec<NewFleetEntry>,
        ) -> Result<usize> {
            if self.fail_next_replace.swap(false, Ordering::SeqCst) {
                // Simulated mid-commit failure: prior state stays untouched.
                return Err(Error::Database(DatabaseError::TransactionFailed(
                    "simulated batch failure".to_string(),
                )));
            }
            let mut entries = self.entries.lock().unwrap();
            entries.retain(|e| e.user_id != user_id);
            let inserted = new_entries.len();
            for (i, new_entry) in new_entries.into_iter().enumerate() {
                entries.push(FleetEntry {
                    id: format!("entry-{}", i),
                    user_id: new_entry.user_id,
                    vehicle_slug: new_entry.vehicle_slug,
                    insurance_tier_id: new_entry.insurance_tier_id,
                    warbond: new_entry.warbond,
                    loaner: new_entry.loaner,
                    pledge_id: new_entry.pledge_id,
                    pledge_name: new_entry.pledge_name,
                    pledge_cost: new_entry.pledge_cost,
                    pledge_date: new_entry.pledge_date,
                    custom_name: new_entry.custom_name,
                    imported_at: chrono::Utc::now().naive_utc(),
                });
            }
            Ok(inserted)
        }
    }

    // --- Mock InsuranceTierRepository ---
    struct MockInsuranceTierRepository;

    impl InsuranceTierRepositoryTrait for MockInsuranceTierRepository {
        fn list(&self) -> Result<Vec<InsuranceTier>> {
            Ok(ALL_TIERS
                .iter()
                .map(|id| InsuranceTier {
                    id: id.to_string(),
                    label: id.to_string(),
                    duration_months: None,
                    is_lifetime: *id == TIER_LTI,
                })
                .collect())
        }

        fn get_by_id(&self, tier_id: &str) -> Result<InsuranceTier> {
            self.list()?
                .into_iter()
                .find(|t| t.id == tier_id)
                .ok_or_else(|| Error::Database(DatabaseError::NotFound(tier_id.to_string())))
        }
    }

    fn build_service(
        vehicles: Vec<Vehicle>,
    ) -> (
        FleetService,
        Arc<MockFleetRepository>,
        Arc<MockCatalogService>,
    ) {
        let fleet_repository = Arc::new(MockFleetRepository::new());
        let catalog_service = Arc::new(MockCatalogService::new(vehicles));
        let service = FleetService::new(
            fleet_repository.clone(),
            catalog_service.clone(),
            Arc::new(MockInsuranceTierRepository),
        );
        (service, fleet_repository, catalog_service)
    }

    #[tokio::test]
    async fn test_non_sequence_payload_rejected_before_processing() {
        let (service, repo, catalog) =
            build_service(vec![MockCatalogService::vehicle("aurora", "Aurora")]);

        let result = service
            .import_fleet("user-1", json!({"ships": "not a list"}))
            .await;

        assert!(matches!(result, Err(Error::Fleet(_))));
        assert!(repo.get_by_user("user-1").unwrap().is_empty());
        assert_eq!(catalog.stub_call_count(), 0);
    }

    #[tokio::test]
    async fn test_known_vehicle_resolved_with_lifetime_tier() {
        let (service, repo, catalog) = build_service(vec![MockCatalogService::vehicle(
            "avenger-titan",
            "Avenger Titan",
        )]);

        let result = service
            .import_fleet(
                "user-1",
                json!([{
                    "shipCode": "AEGS_Avenger_Titan",
                    "name": "Avenger Titan",
                    "lti": true
                }]),
            )
            .await
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.message, "1 of 1 entries imported");

        let fleet = repo.get_by_user("user-1").unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet[0].vehicle_slug, "avenger-titan");
        assert_eq!(fleet[0].insurance_tier_id.as_deref(), Some("LTI"));
        assert_eq!(fleet[0].custom_name, None);
        assert_eq!(catalog.stub_call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_vehicle_imported_via_stub() {
        let (service, repo, catalog) =
            build_service(vec![MockCatalogService::vehicle("aurora", "Aurora")]);

        let result = service
            .import_fleet(
                "user-1",
                json!([{
                    "shipCode": "AEGS_Foobar9000",
                    "name": "Foobar 9000",
                    "lti": false,
                    "insurance": "72 month"
                }]),
            )
            .await
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.total, 1);

        let stub = catalog.get_vehicle_by_slug("foobar9000").unwrap();
        assert!(stub.is_provisional());
        assert_eq!(stub.name, "Foobar 9000");

        let fleet = repo.get_by_user("user-1").unwrap();
        assert_eq!(fleet[0].vehicle_slug, "foobar9000");
        assert_eq!(fleet[0].insurance_tier_id.as_deref(), Some("IAE-72M"));
    }

    #[tokio::test]
    async fn test_duplicate_unseen_slug_registers_one_stub() {
        let (service, repo, catalog) = build_service(vec![]);

        let record = json!({
            "shipCode": "AEGS_Foobar9000",
            "name": "Foobar 9000"
        });
        let result = service
            .import_fleet("user-1", json!([record.clone(), record]))
            .await
            .unwrap();

        assert_eq!(result.imported, 2);
        assert_eq!(catalog.stub_call_count(), 1);
        assert_eq!(repo.get_by_user("user-1").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_second_import_finds_stub_instead_of_registering() {
        let (service, _repo, catalog) = build_service(vec![]);

        let batch = json!([{"shipCode": "AEGS_Foobar9000", "name": "Foobar 9000"}]);
        service.import_fleet("user-1", batch.clone()).await.unwrap();
        assert_eq!(catalog.stub_call_count(), 1);

        // The stub is now in the catalog; the second import resolves against
        // it via exact slug match.
        service.import_fleet("user-1", batch).await.unwrap();
        assert_eq!(catalog.stub_call_count(), 1);
        assert_eq!(catalog.list_vehicles().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reimport_replaces_instead_of_duplicating() {
        let (service, repo, _catalog) = build_service(vec![
            MockCatalogService::vehicle("aurora", "Aurora"),
            MockCatalogService::vehicle("avenger-titan", "Avenger Titan"),
        ]);

        let batch = json!([
            {"shipCode": "RSI_Aurora", "name": "Aurora"},
            {"shipCode": "AEGS_Avenger_Titan", "name": "Avenger Titan"}
        ]);

        service.import_fleet("user-1", batch.clone()).await.unwrap();
        service.import_fleet("user-1", batch).await.unwrap();

        let fleet = repo.get_by_user("user-1").unwrap();
        assert_eq!(fleet.len(), 2);
        let mut slugs: Vec<&str> = fleet.iter().map(|e| e.vehicle_slug.as_str()).collect();
        slugs.sort();
        assert_eq!(slugs, vec!["aurora", "avenger-titan"]);
    }

    #[tokio::test]
    async fn test_exact_match_never_falls_through_to_prefix() {
        let (service, repo, _catalog) = build_service(vec![
            MockCatalogService::vehicle("aurora", "Aurora"),
            MockCatalogService::vehicle("auroramx", "Aurora MX"),
        ]);

        service
            .import_fleet("user-1", json!([{"shipCode": "RSI_Aurora", "name": "Anything"}]))
            .await
            .unwrap();

        let fleet = repo.get_by_user("user-1").unwrap();
        assert_eq!(fleet[0].vehicle_slug, "aurora");
    }

    #[tokio::test]
    async fn test_longest_insurance_marker_wins() {
        let (service, repo, _catalog) =
            build_service(vec![MockCatalogService::vehicle("aurora", "Aurora")]);

        service
            .import_fleet(
                "user-1",
                json!([{
                    "shipCode": "RSI_Aurora",
                    "name": "Aurora",
                    "lti": false,
                    "insurance": "120 Month Insurance"
                }]),
            )
            .await
            .unwrap();

        let fleet = repo.get_by_user("user-1").unwrap();
        assert_eq!(fleet[0].insurance_tier_id.as_deref(), Some("IAE-120M"));
    }

    #[tokio::test]
    async fn test_unmatched_insurance_text_classified_unknown() {
        let (service, repo, _catalog) =
            build_service(vec![MockCatalogService::vehicle("aurora", "Aurora")]);

        service
            .import_fleet(
                "user-1",
                json!([{
                    "shipCode": "RSI_Aurora",
                    "name": "Aurora",
                    "insurance": "complimentary hull"
                }]),
            )
            .await
            .unwrap();

        let fleet = repo.get_by_user("user-1").unwrap();
        assert_eq!(fleet[0].insurance_tier_id.as_deref(), Some("UNKNOWN"));
    }

    #[tokio::test]
    async fn test_stock_nickname_suppressed_custom_preserved() {
        let (service, repo, _catalog) = build_service(vec![
            MockCatalogService::vehicle("avenger-titan", "Avenger Titan"),
            MockCatalogService::vehicle("aurora", "Aurora"),
        ]);

        service
            .import_fleet(
                "user-1",
                json!([
                    {
                        "shipCode": "AEGS_Avenger_Titan",
                        "name": "Avenger Titan",
                        "nickname": "AVENGER TITAN"
                    },
                    {
                        "shipCode": "RSI_Aurora",
                        "name": "Aurora",
                        "nickname": "Betty Lou"
                    }
                ]),
            )
            .await
            .unwrap();

        let fleet = repo.get_by_user("user-1").unwrap();
        let titan = fleet.iter().find(|e| e.vehicle_slug == "avenger-titan").unwrap();
        let aurora = fleet.iter().find(|e| e.vehicle_slug == "aurora").unwrap();
        assert_eq!(titan.custom_name, None);
        assert_eq!(aurora.custom_name.as_deref(), Some("Betty Lou"));
    }

    #[tokio::test]
    async fn test_structurally_invalid_records_only_reduce_imported() {
        let (service, repo, _catalog) =
            build_service(vec![MockCatalogService::vehicle("aurora", "Aurora")]);

        let result = service
            .import_fleet(
                "user-1",
                json!([
                    {"shipCode": "RSI_Aurora", "name": "Aurora"},
                    {"insurance": "no identity at all"},
                    42
                ]),
            )
            .await
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.total, 3);
        assert_eq!(result.message, "1 of 3 entries imported");
        assert_eq!(repo.get_by_user("user-1").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_prior_fleet_intact() {
        let (service, repo, _catalog) = build_service(vec![
            MockCatalogService::vehicle("aurora", "Aurora"),
            MockCatalogService::vehicle("avenger-titan", "Avenger Titan"),
        ]);

        service
            .import_fleet("user-1", json!([{"shipCode": "RSI_Aurora", "name": "Aurora"}]))
            .await
            .unwrap();
        let before = repo.get_by_user("user-1").unwrap();

        repo.fail_next_replace();
        let result = service
            .import_fleet(
                "user-1",
                json!([{"shipCode": "AEGS_Avenger_Titan", "name": "Avenger Titan"}]),
            )
            .await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(repo.get_by_user("user-1").unwrap(), before);
    }

    #[tokio::test]
    async fn test_pledge_metadata_passed_through_verbatim() {
        let (service, repo, _catalog) =
            build_service(vec![MockCatalogService::vehicle("aurora", "Aurora")]);

        service
            .import_fleet(
                "user-1",
                json!([{
                    "shipCode": "RSI_Aurora",
                    "name": "Aurora",
                    "warbond": true,
                    "pledgeId": "12345",
                    "pledgeName": "Aurora Starter",
                    "pledgeCost": "$25.00 USD",
                    "pledgeDate": "November 18, 2014"
                }]),
            )
            .await
            .unwrap();

        let fleet = repo.get_by_user("user-1").unwrap();
        assert!(fleet[0].warbond);
        assert_eq!(fleet[0].pledge_id.as_deref(), Some("12345"));
        assert_eq!(fleet[0].pledge_name.as_deref(), Some("Aurora Starter"));
        assert_eq!(fleet[0].pledge_cost.as_deref(), Some("$25.00 USD"));
        assert_eq!(fleet[0].pledge_date.as_deref(), Some("November 18, 2014"));
    }
}
