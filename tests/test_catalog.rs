mod common;

use common::{new_property, setup};
use estatelens::domain::entities::property::PredictionInterval;
use estatelens::domain::error::DomainError;
use estatelens::domain::values::filter_spec::FilterSpecification;
use estatelens::EstateLens;

#[test]
fn test_add_and_get_round_trip() {
    let lens = setup();
    let mut input = new_property(300_000.0, 75.0);
    input.features.elevator = true;
    input.features.terrace = true;
    input.prediction_interval = Some(PredictionInterval { lower: 5.5, upper: 8.9 });
    input.images = vec!["https://img.example/1.jpg".into()];
    input.cluster_id = Some("c7".into());

    let created = lens.add_property(input).unwrap();
    assert_eq!(created.id.len(), 36);
    assert_eq!(created.price_per_sqm, 4000.0);

    let fetched = lens.get_property(&created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_update_recomputes_price_per_sqm() {
    let lens = setup();
    let created = lens.add_property(new_property(300_000.0, 75.0)).unwrap();

    let updated = lens
        .update_property(&created.id, new_property(360_000.0, 90.0))
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price_per_sqm, 4000.0);
    assert_eq!(lens.get_property(&created.id).unwrap().price, 360_000.0);
    assert_eq!(lens.property_count().unwrap(), 1);
}

#[test]
fn test_update_missing_property() {
    let lens = setup();
    let err = lens.update_property("nope", new_property(1.0, 1.0)).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_rejects_invalid_input() {
    let lens = setup();

    let err = lens.add_property(new_property(0.0, 50.0)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = lens.add_property(new_property(100_000.0, -3.0)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let mut bad = new_property(100_000.0, 50.0);
    bad.arbitrage_score = 1.5;
    assert!(lens.add_property(bad).is_err());

    let mut bad = new_property(100_000.0, 50.0);
    bad.rooms = 0;
    assert!(lens.add_property(bad).is_err());

    let mut bad = new_property(100_000.0, 50.0);
    bad.longitude = 200.0;
    assert!(lens.add_property(bad).is_err());

    assert_eq!(lens.property_count().unwrap(), 0);
}

#[test]
fn test_remove_property() {
    let lens = setup();
    let created = lens.add_property(new_property(250_000.0, 50.0)).unwrap();
    lens.remove_property(&created.id).unwrap();
    assert!(matches!(lens.get_property(&created.id), Err(DomainError::NotFound(_))));
    assert!(matches!(lens.remove_property(&created.id), Err(DomainError::NotFound(_))));
}

#[test]
fn test_list_keeps_insertion_order() {
    let lens = setup();
    let first = lens.add_property(new_property(500_000.0, 100.0)).unwrap();
    let second = lens.add_property(new_property(100_000.0, 40.0)).unwrap();
    let third = lens.add_property(new_property(300_000.0, 60.0)).unwrap();
    lens.update_property(&first.id, new_property(510_000.0, 100.0)).unwrap();

    let listed: Vec<String> = lens.list_properties().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(listed, vec![first.id, second.id, third.id]);
}

#[test]
fn test_add_accepts_dashboard_json() {
    let lens = setup();
    let input = serde_json::from_str(
        r#"{
            "address": "Calle de Toledo 5",
            "neighborhood": "La Latina",
            "latitude": 40.41,
            "longitude": -3.71,
            "price": 240000,
            "size": 60,
            "rooms": 2,
            "propertyType": "studio",
            "predictedROI": 8.1,
            "arbitrageScore": 0.7,
            "features": {"balcony": true}
        }"#,
    )
    .unwrap();
    let created = lens.add_property(input).unwrap();
    assert!(created.features.balcony);
    assert_eq!(created.price_per_sqm, 4000.0);
    assert_eq!(created.risk_indicator.to_string(), "medium");
}

#[test]
fn test_catalog_persists_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let path = path.to_str().unwrap();

    let id = {
        let lens = EstateLens::open(path).unwrap();
        lens.add_property(new_property(300_000.0, 75.0)).unwrap().id
    };

    let reopened = EstateLens::open(path).unwrap();
    assert_eq!(reopened.get_property(&id).unwrap().price, 300_000.0);
    assert_eq!(reopened.explore(&FilterSpecification::new()).unwrap().summary.count, 1);
}
