//! Shared test helpers.
#![allow(dead_code)]

use estatelens::domain::entities::property::{price_per_sqm, NewProperty, Property};
use estatelens::domain::ports::property_repository::PropertyRepository;
use estatelens::domain::ports::saved_search_repository::SavedSearchRepository;
use estatelens::domain::values::feature::FeatureSet;
use estatelens::domain::values::property_type::PropertyType;
use estatelens::domain::values::risk_level::RiskLevel;
use estatelens::infrastructure::sqlite::migrations::run_migrations;
use estatelens::infrastructure::sqlite::property_repo::SqlitePropertyRepo;
use estatelens::infrastructure::sqlite::saved_search_repo::SqliteSavedSearchRepo;
use estatelens::EstateLens;
use rusqlite::Connection;
use std::sync::Arc;

pub fn setup() -> EstateLens {
    EstateLens::in_memory().unwrap()
}

fn memory_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    conn
}

/// Facade over a catalog seeded with `catalog`, in that order, ids kept.
pub fn setup_with(catalog: &[Property]) -> EstateLens {
    let properties = SqlitePropertyRepo::new(memory_connection());
    for property in catalog {
        properties.save(property).unwrap();
    }
    let properties: Arc<dyn PropertyRepository> = Arc::new(properties);
    let searches: Arc<dyn SavedSearchRepository> = Arc::new(SqliteSavedSearchRepo::new(memory_connection()));
    EstateLens::with_repositories(properties, searches)
}

/// 80 m² apartment in Salamanca, medium risk, unclustered.
pub fn property(id: &str, price: f64) -> Property {
    Property {
        id: id.to_string(),
        title: None,
        address: format!("{id} Calle de Serrano"),
        neighborhood: "Salamanca".into(),
        latitude: 40.4297,
        longitude: -3.6836,
        price,
        size: 80.0,
        price_per_sqm: price_per_sqm(price, 80.0),
        rooms: 3,
        property_type: PropertyType::Apartment,
        floor: Some(2),
        features: FeatureSet::default(),
        predicted_roi: 6.5,
        arbitrage_score: 0.6,
        risk_indicator: RiskLevel::Medium,
        prediction_interval: None,
        cluster_id: None,
        cluster_label: None,
        images: vec![],
    }
}

pub fn new_property(price: f64, size: f64) -> NewProperty {
    NewProperty {
        title: Some("Test listing".into()),
        address: "Calle de Alcalá 100".into(),
        neighborhood: "Retiro".into(),
        latitude: 40.42,
        longitude: -3.68,
        price,
        size,
        rooms: 2,
        property_type: PropertyType::Apartment,
        floor: None,
        features: FeatureSet::default(),
        predicted_roi: 7.2,
        arbitrage_score: 0.75,
        risk_indicator: RiskLevel::Low,
        prediction_interval: None,
        cluster_id: None,
        cluster_label: None,
        images: vec![],
    }
}

pub fn ids(properties: &[Property]) -> Vec<&str> {
    properties.iter().map(|p| p.id.as_str()).collect()
}
