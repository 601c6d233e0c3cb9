//! Amenity flags carried by every property.
//!
//! [`Feature`] names a single amenity and is what filter specifications
//! reference; [`FeatureSet`] is the per-property record of which amenities
//! are present.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialized as its filter key; deserialized through [`FromStr`], so JSON
/// documents accept every spelling the command line does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Feature {
    Elevator,
    Parking,
    Balcony,
    Terrace,
    Garden,
    SwimmingPool,
    Gym,
    Security,
    AirConditioning,
    Heating,
    Furnished,
    Storage,
    Concierge,
    PetFriendly,
    WheelchairAccess,
}

impl Feature {
    pub const ALL: [Feature; 15] = [
        Feature::Elevator,
        Feature::Parking,
        Feature::Balcony,
        Feature::Terrace,
        Feature::Garden,
        Feature::SwimmingPool,
        Feature::Gym,
        Feature::Security,
        Feature::AirConditioning,
        Feature::Heating,
        Feature::Furnished,
        Feature::Storage,
        Feature::Concierge,
        Feature::PetFriendly,
        Feature::WheelchairAccess,
    ];

    /// Filter key as used by saved searches and the dashboard (`hasElevator`).
    pub fn key(&self) -> &'static str {
        match self {
            Feature::Elevator => "hasElevator",
            Feature::Parking => "hasParking",
            Feature::Balcony => "hasBalcony",
            Feature::Terrace => "hasTerrace",
            Feature::Garden => "hasGarden",
            Feature::SwimmingPool => "hasSwimmingPool",
            Feature::Gym => "hasGym",
            Feature::Security => "hasSecurity",
            Feature::AirConditioning => "hasAirConditioning",
            Feature::Heating => "hasHeating",
            Feature::Furnished => "hasFurnished",
            Feature::Storage => "hasStorage",
            Feature::Concierge => "hasConcierge",
            Feature::PetFriendly => "hasPetFriendly",
            Feature::WheelchairAccess => "hasWheelchairAccess",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Elevator => "Elevator",
            Feature::Parking => "Parking",
            Feature::Balcony => "Balcony",
            Feature::Terrace => "Terrace",
            Feature::Garden => "Garden",
            Feature::SwimmingPool => "Swimming Pool",
            Feature::Gym => "Gym",
            Feature::Security => "Security",
            Feature::AirConditioning => "Air Conditioning",
            Feature::Heating => "Heating",
            Feature::Furnished => "Furnished",
            Feature::Storage => "Storage",
            Feature::Concierge => "Concierge",
            Feature::PetFriendly => "Pet Friendly",
            Feature::WheelchairAccess => "Wheelchair Access",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Feature {
    type Err = String;

    /// Accepts the filter key (`hasElevator`), the bare name in camel or
    /// snake case (`airConditioning`, `air_conditioning`) and the live API
    /// spellings (`teracce`, `pool`, `wheelchair`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        let bare = normalized.strip_prefix("has").unwrap_or(&normalized);
        match bare {
            "elevator" | "lift" => Ok(Feature::Elevator),
            "parking" => Ok(Feature::Parking),
            "balcony" => Ok(Feature::Balcony),
            "terrace" | "teracce" => Ok(Feature::Terrace),
            "garden" => Ok(Feature::Garden),
            "swimmingpool" | "pool" => Ok(Feature::SwimmingPool),
            "gym" => Ok(Feature::Gym),
            "security" => Ok(Feature::Security),
            "airconditioning" | "ac" => Ok(Feature::AirConditioning),
            "heating" => Ok(Feature::Heating),
            "furnished" => Ok(Feature::Furnished),
            "storage" => Ok(Feature::Storage),
            "concierge" => Ok(Feature::Concierge),
            "petfriendly" | "pets" => Ok(Feature::PetFriendly),
            "wheelchairaccess" | "wheelchair" => Ok(Feature::WheelchairAccess),
            _ => Err(format!("Unknown feature: {s}")),
        }
    }
}

impl TryFrom<String> for Feature {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feature> for String {
    fn from(feature: Feature) -> Self {
        feature.key().to_string()
    }
}

/// Which amenities a property has. Absent keys deserialize as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureSet {
    pub elevator: bool,
    pub parking: bool,
    pub balcony: bool,
    pub terrace: bool,
    pub garden: bool,
    pub swimming_pool: bool,
    pub gym: bool,
    pub security: bool,
    pub air_conditioning: bool,
    pub heating: bool,
    pub furnished: bool,
    pub storage: bool,
    pub concierge: bool,
    pub pet_friendly: bool,
    pub wheelchair_access: bool,
}

impl FeatureSet {
    pub fn from_features(features: &[Feature]) -> Self {
        let mut set = FeatureSet::default();
        for feature in features {
            set.set(*feature, true);
        }
        set
    }

    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::Elevator => self.elevator,
            Feature::Parking => self.parking,
            Feature::Balcony => self.balcony,
            Feature::Terrace => self.terrace,
            Feature::Garden => self.garden,
            Feature::SwimmingPool => self.swimming_pool,
            Feature::Gym => self.gym,
            Feature::Security => self.security,
            Feature::AirConditioning => self.air_conditioning,
            Feature::Heating => self.heating,
            Feature::Furnished => self.furnished,
            Feature::Storage => self.storage,
            Feature::Concierge => self.concierge,
            Feature::PetFriendly => self.pet_friendly,
            Feature::WheelchairAccess => self.wheelchair_access,
        }
    }

    pub fn set(&mut self, feature: Feature, value: bool) {
        let slot = match feature {
            Feature::Elevator => &mut self.elevator,
            Feature::Parking => &mut self.parking,
            Feature::Balcony => &mut self.balcony,
            Feature::Terrace => &mut self.terrace,
            Feature::Garden => &mut self.garden,
            Feature::SwimmingPool => &mut self.swimming_pool,
            Feature::Gym => &mut self.gym,
            Feature::Security => &mut self.security,
            Feature::AirConditioning => &mut self.air_conditioning,
            Feature::Heating => &mut self.heating,
            Feature::Furnished => &mut self.furnished,
            Feature::Storage => &mut self.storage,
            Feature::Concierge => &mut self.concierge,
            Feature::PetFriendly => &mut self.pet_friendly,
            Feature::WheelchairAccess => &mut self.wheelchair_access,
        };
        *slot = value;
    }

    pub fn has_all(&self, features: &[Feature]) -> bool {
        features.iter().all(|f| self.has(*f))
    }

    /// Present amenities in canonical order.
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL.into_iter().filter(|f| self.has(*f)).collect()
    }
}
