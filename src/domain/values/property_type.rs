use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
    ];
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Apartment => write!(f, "apartment"),
            PropertyType::House => write!(f, "house"),
            PropertyType::Studio => write!(f, "studio"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apartment" | "flat" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "studio" => Ok(PropertyType::Studio),
            _ => Err(format!("Unknown property type: {s}")),
        }
    }
}
