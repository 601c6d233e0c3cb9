use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking applied to a filtered candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Arbitrage score, highest first.
    #[default]
    #[serde(rename = "arbitrageScore")]
    ArbitrageScore,
    /// Predicted ROI, highest first.
    #[serde(rename = "predictedROI")]
    PredictedRoi,
    /// Price, cheapest first.
    #[serde(rename = "price")]
    Price,
    /// Price per square meter, cheapest first.
    #[serde(rename = "pricePerSqm")]
    PricePerSqm,
    /// Size, largest first.
    #[serde(rename = "size")]
    Size,
}

impl SortKey {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortKey::ArbitrageScore | SortKey::PredictedRoi | SortKey::Size)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::ArbitrageScore => write!(f, "arbitrageScore"),
            SortKey::PredictedRoi => write!(f, "predictedROI"),
            SortKey::Price => write!(f, "price"),
            SortKey::PricePerSqm => write!(f, "pricePerSqm"),
            SortKey::Size => write!(f, "size"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], "").as_str() {
            "arbitragescore" | "arbitrage" | "score" => Ok(SortKey::ArbitrageScore),
            "predictedroi" | "roi" => Ok(SortKey::PredictedRoi),
            "price" => Ok(SortKey::Price),
            "pricepersqm" | "pricepersquaremeter" | "ppsqm" => Ok(SortKey::PricePerSqm),
            "size" => Ok(SortKey::Size),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}
