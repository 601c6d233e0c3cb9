use crate::domain::entities::property::{price_per_sqm, Property};
use crate::domain::values::feature::FeatureSet;
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::risk_level::RiskLevel;

/// 60 m² apartment in Centro, low risk, unclustered.
pub fn property(id: &str, price: f64) -> Property {
    Property {
        id: id.to_string(),
        title: None,
        address: format!("{id} Calle Mayor"),
        neighborhood: "Centro".into(),
        latitude: 40.4168,
        longitude: -3.7038,
        price,
        size: 60.0,
        price_per_sqm: price_per_sqm(price, 60.0),
        rooms: 2,
        property_type: PropertyType::Apartment,
        floor: None,
        features: FeatureSet::default(),
        predicted_roi: 7.0,
        arbitrage_score: 0.5,
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
