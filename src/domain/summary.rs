use serde::{Deserialize, Serialize};

use crate::domain::entities::property::Property;

/// Headline statistics for a candidate set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    #[serde(rename = "avgROI")]
    pub avg_roi: f64,
    #[serde(rename = "avgArbitrageScore")]
    pub avg_arbitrage_score: f64,
}

/// Arithmetic mean, 0 for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

pub fn summarize(properties: &[Property]) -> Summary {
    Summary {
        count: properties.len(),
        avg_roi: mean(properties.iter().map(|p| p.predicted_roi)),
        avg_arbitrage_score: mean(properties.iter().map(|p| p.arbitrage_score)),
    }
}
