use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;
use crate::domain::values::feature::{Feature, FeatureSet};
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::risk_level::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInterval {
    pub lower: f64,
    pub upper: f64,
}

/// A listing annotated with model-derived investment metrics.
///
/// `price_per_sqm` is stored, not derived on read: writers keep it equal to
/// `price / size` (see [`Property::normalized`]).
///
/// Amenities may arrive either nested under `features` or as the dashboard's
/// flat `hasElevator`-style booleans; flat keys win when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub address: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    /// Square meters.
    pub size: f64,
    #[serde(default)]
    pub price_per_sqm: f64,
    pub rooms: u32,
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default)]
    pub features: FeatureSet,
    #[serde(rename = "predictedROI")]
    pub predicted_roi: f64,
    pub arbitrage_score: f64,
    pub risk_indicator: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_interval: Option<PredictionInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Property::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let flags = take_flat_features(&mut value);
        let mut property = Property::deserialize(value).map_err(serde::de::Error::custom)?;
        for (feature, present) in flags {
            property.features.set(feature, present);
        }
        Ok(property)
    }
}

/// Removes top-level `hasX: bool` keys that name a feature.
fn take_flat_features(value: &mut serde_json::Value) -> Vec<(Feature, bool)> {
    let Some(object) = value.as_object_mut() else {
        return Vec::new();
    };
    let keys: Vec<String> = object
        .iter()
        .filter(|(key, flag)| key.starts_with("has") && flag.is_boolean())
        .map(|(key, _)| key.clone())
        .collect();
    keys.into_iter()
        .filter_map(|key| {
            let feature = key.parse::<Feature>().ok()?;
            let present = object.remove(&key)?.as_bool()?;
            Some((feature, present))
        })
        .collect()
}

/// Price per square meter, or 0 when the size is not positive.
pub fn price_per_sqm(price: f64, size: f64) -> f64 {
    if size > 0.0 {
        price / size
    } else {
        0.0
    }
}

impl Property {
    /// Copy with `price_per_sqm` recomputed from price and size.
    pub fn normalized(mut self) -> Self {
        self.price_per_sqm = price_per_sqm(self.price, self.size);
        self
    }

    /// Checks applied before a property is written to the catalog.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidInput("Property id is empty".into()));
        }
        if !(self.price > 0.0) {
            return Err(DomainError::InvalidInput(format!(
                "Price must be positive, got {}",
                self.price
            )));
        }
        if !(self.size > 0.0) {
            return Err(DomainError::InvalidInput(format!(
                "Size must be positive, got {}",
                self.size
            )));
        }
        if self.rooms == 0 {
            return Err(DomainError::InvalidInput("Rooms must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.arbitrage_score) {
            return Err(DomainError::InvalidInput(format!(
                "Arbitrage score must be between 0.0 and 1.0, got {}",
                self.arbitrage_score
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(DomainError::InvalidInput(format!(
                "Coordinates out of range: ({}, {})",
                self.latitude, self.longitude
            )));
        }
        if let Some(interval) = &self.prediction_interval {
            if interval.lower > interval.upper {
                return Err(DomainError::InvalidInput(format!(
                    "Prediction interval lower bound {} exceeds upper bound {}",
                    interval.lower, interval.upper
                )));
            }
        }
        Ok(())
    }
}

/// Writable fields of a property, as submitted by the admin form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    #[serde(default)]
    pub title: Option<String>,
    pub address: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    pub size: f64,
    pub rooms: u32,
    pub property_type: PropertyType,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub features: FeatureSet,
    #[serde(rename = "predictedROI")]
    pub predicted_roi: f64,
    pub arbitrage_score: f64,
    #[serde(default)]
    pub risk_indicator: RiskLevel,
    #[serde(default)]
    pub prediction_interval: Option<PredictionInterval>,
    #[serde(default)]
    pub cluster_id: Option<String>,
    #[serde(default)]
    pub cluster_label: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewProperty {
    pub fn into_property(self, id: String) -> Property {
        Property {
            id,
            title: self.title,
            address: self.address,
            neighborhood: self.neighborhood,
            latitude: self.latitude,
            longitude: self.longitude,
            price: self.price,
            size: self.size,
            price_per_sqm: 0.0,
            rooms: self.rooms,
            property_type: self.property_type,
            floor: self.floor,
            features: self.features,
            predicted_roi: self.predicted_roi,
            arbitrage_score: self.arbitrage_score,
            risk_indicator: self.risk_indicator,
            prediction_interval: self.prediction_interval,
            cluster_id: self.cluster_id,
            cluster_label: self.cluster_label,
            images: self.images,
        }
        .normalized()
    }
}
