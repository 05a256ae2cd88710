//! Tests for catalog domain models.

#[cfg(test)]
mod tests {
    use crate::catalog::{NewVehicle, Vehicle, VehicleStatus};

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Provisional).unwrap(),
            "\"PROVISIONAL\""
        );
        assert_eq!(
            serde_json::to_string(&VehicleStatus::Enriched).unwrap(),
            "\"ENRICHED\""
        );
    }

    #[test]
    fn test_status_db_round_trip() {
        for status in [VehicleStatus::Provisional, VehicleStatus::Enriched] {
            assert_eq!(VehicleStatus::from_db_str(status.as_db_str()), Some(status));
        }
        assert_eq!(VehicleStatus::from_db_str("RETIRED"), None);
    }

    #[test]
    fn test_new_stub_defaults_to_provisional() {
        let stub = NewVehicle::new_stub("avenger-titan", "Avenger Titan");
        assert_eq!(stub.slug, "avenger-titan");
        assert_eq!(stub.name, "Avenger Titan");
        assert_eq!(stub.status, VehicleStatus::Provisional);
        assert!(stub.manufacturer_code.is_none());
        assert!(stub.classification.is_none());
    }

    #[test]
    fn test_stub_validation_requires_slug_and_name() {
        assert!(NewVehicle::new_stub("aurora-mr", "Aurora MR")
            .validate()
            .is_ok());
        assert!(NewVehicle::new_stub("", "Aurora MR").validate().is_err());
        assert!(NewVehicle::new_stub("aurora-mr", "  ").validate().is_err());
    }

    #[test]
    fn test_provisional_predicate() {
        let vehicle = Vehicle {
            slug: "foobar-9000".to_string(),
            name: "Foobar 9000".to_string(),
            ..Default::default()
        };
        assert!(vehicle.is_provisional());

        let enriched = Vehicle {
            status: VehicleStatus::Enriched,
            ..vehicle
        };
        assert!(!enriched.is_provisional());
    }
}
