//! Property-unit API schema and its mapping onto [`Property`].
//!
//! The live backend names things differently from the catalog: `room`
//! instead of rooms, `houseArea`/`usefulArea` for size, numeric type ids,
//! misspelled amenity keys (`teracce`) and a 0-10 quality `score` instead of
//! a risk band. All of that is resolved here so the rest of the crate only
//! sees canonical properties.

use serde::Deserialize;

use crate::domain::entities::property::{price_per_sqm, Property};
use crate::domain::values::feature::FeatureSet;
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::risk_level::RiskLevel;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UnitFeatures {
    pub elevator: bool,
    pub teracce: bool,
    pub gym: bool,
    pub heating: bool,
    pub concierge: bool,
    pub parking: bool,
    pub garden: bool,
    pub security: bool,
    pub furnished: bool,
    #[serde(rename = "petFriendly")]
    pub pet_friendly: bool,
    pub balcony: bool,
    pub pool: bool,
    #[serde(rename = "airConditioning")]
    pub air_conditioning: bool,
    pub storage: bool,
    pub wheelchair: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUnit {
    /// The backend sends numeric ids; some older payloads send strings.
    pub id: serde_json::Value,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub address: String,
    #[serde(default)]
    pub floor: Option<i32>,
    pub room: u32,
    pub price: f64,
    #[serde(default, rename = "pricePerM2")]
    pub price_per_m2: Option<f64>,
    #[serde(default)]
    pub useful_area: Option<f64>,
    #[serde(default)]
    pub house_area: Option<f64>,
    pub roi: f64,
    pub score: f64,
    pub arbitrage: f64,
    pub neighborhood: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub type_id: Option<i64>,
    #[serde(default)]
    pub property_type: Option<i64>,
    #[serde(default)]
    pub features: Option<UnitFeatures>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUnitsResponse {
    #[serde(default)]
    pub data: Vec<PropertyUnit>,
    pub is_success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: i64,
}

/// Backend type ids: 1 apartment, 2 house, 3 studio.
pub fn property_type_from_id(id: i64) -> Option<PropertyType> {
    match id {
        1 => Some(PropertyType::Apartment),
        2 => Some(PropertyType::House),
        3 => Some(PropertyType::Studio),
        _ => None,
    }
}

/// Risk band from the backend's 0-10 score: above 7 is low risk, above 4
/// medium, anything else high.
pub fn risk_from_score(score: f64) -> RiskLevel {
    if score > 7.0 {
        RiskLevel::Low
    } else if score > 4.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

impl From<&UnitFeatures> for FeatureSet {
    fn from(f: &UnitFeatures) -> Self {
        FeatureSet {
            elevator: f.elevator,
            parking: f.parking,
            balcony: f.balcony,
            terrace: f.teracce,
            garden: f.garden,
            swimming_pool: f.pool,
            gym: f.gym,
            security: f.security,
            air_conditioning: f.air_conditioning,
            heating: f.heating,
            furnished: f.furnished,
            storage: f.storage,
            concierge: f.concierge,
            pet_friendly: f.pet_friendly,
            wheelchair_access: f.wheelchair,
        }
    }
}

fn unit_id(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn to_property(unit: &PropertyUnit) -> Property {
    let size = unit
        .house_area
        .filter(|a| *a > 0.0)
        .or(unit.useful_area)
        .unwrap_or(0.0);
    let per_sqm = unit
        .price_per_m2
        .filter(|p| *p > 0.0)
        .unwrap_or_else(|| price_per_sqm(unit.price, size));
    let property_type = unit
        .type_id
        .or(unit.property_type)
        .and_then(property_type_from_id)
        .unwrap_or(PropertyType::Apartment);

    Property {
        id: unit_id(&unit.id),
        title: unit.title.clone().filter(|t| !t.is_empty()),
        address: unit.address.clone(),
        neighborhood: unit.neighborhood.clone(),
        latitude: unit.latitude,
        longitude: unit.longitude,
        price: unit.price,
        size,
        price_per_sqm: per_sqm,
        rooms: unit.room,
        property_type,
        floor: unit.floor,
        features: unit.features.as_ref().map(FeatureSet::from).unwrap_or_default(),
        predicted_roi: unit.roi,
        arbitrage_score: unit.arbitrage,
        risk_indicator: risk_from_score(unit.score),
        prediction_interval: None,
        cluster_id: None,
        cluster_label: None,
        images: unit.picture.iter().filter(|p| !p.is_empty()).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_JSON: &str = r#"{
        "id": 42,
        "picture": "https://img.example/42.jpg",
        "title": "Bright flat",
        "address": "Calle Serrano 10",
        "floor": 4,
        "room": 3,
        "price": 450000,
        "usefulArea": 80,
        "houseArea": 90,
        "roi": 7.8,
        "score": 8.2,
        "arbitrage": 0.91,
        "neighborhood": "Salamanca",
        "longitude": -3.68,
        "latitude": 40.43,
        "typeId": 2,
        "features": {"elevator": true, "teracce": true, "pool": true, "wheelchair": true}
    }"#;

    #[test]
    fn test_maps_live_api_unit() {
        let unit: PropertyUnit = serde_json::from_str(UNIT_JSON).unwrap();
        let p = to_property(&unit);
        assert_eq!(p.id, "42");
        assert_eq!(p.rooms, 3);
        assert_eq!(p.size, 90.0);
        assert_eq!(p.price_per_sqm, 5000.0);
        assert_eq!(p.property_type, PropertyType::House);
        assert_eq!(p.risk_indicator, RiskLevel::Low);
        assert!(p.features.elevator);
        assert!(p.features.terrace);
        assert!(p.features.swimming_pool);
        assert!(p.features.wheelchair_access);
        assert!(!p.features.parking);
        assert_eq!(p.images, vec!["https://img.example/42.jpg"]);
    }

    #[test]
    fn test_size_falls_back_to_useful_area() {
        let mut unit: PropertyUnit = serde_json::from_str(UNIT_JSON).unwrap();
        unit.house_area = Some(0.0);
        unit.price_per_m2 = None;
        let p = to_property(&unit);
        assert_eq!(p.size, 80.0);
        assert_eq!(p.price_per_sqm, 450000.0 / 80.0);
    }

    #[test]
    fn test_explicit_price_per_m2_wins() {
        let mut unit: PropertyUnit = serde_json::from_str(UNIT_JSON).unwrap();
        unit.price_per_m2 = Some(4999.0);
        assert_eq!(to_property(&unit).price_per_sqm, 4999.0);
    }

    #[test]
    fn test_unknown_type_defaults_to_apartment() {
        let mut unit: PropertyUnit = serde_json::from_str(UNIT_JSON).unwrap();
        unit.type_id = Some(9);
        assert_eq!(to_property(&unit).property_type, PropertyType::Apartment);
        unit.type_id = None;
        unit.property_type = Some(3);
        assert_eq!(to_property(&unit).property_type, PropertyType::Studio);
    }

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(risk_from_score(7.1), RiskLevel::Low);
        assert_eq!(risk_from_score(7.0), RiskLevel::Medium);
        assert_eq!(risk_from_score(4.5), RiskLevel::Medium);
        assert_eq!(risk_from_score(4.0), RiskLevel::High);
    }

    #[test]
    fn test_string_id_kept_verbatim() {
        let mut unit: PropertyUnit = serde_json::from_str(UNIT_JSON).unwrap();
        unit.id = serde_json::Value::String("unit-7".into());
        assert_eq!(to_property(&unit).id, "unit-7");
    }
}
