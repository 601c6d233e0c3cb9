//! Catalog-wide market statistics for the analytics dashboard.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::distribution::{quantile, roi_bands, BandCount};
use crate::domain::entities::property::Property;
use crate::domain::summary::mean;
use crate::domain::values::property_type::PropertyType;

/// Share of the catalog (by arbitrage score) counted as top opportunities.
const TOP_OPPORTUNITY_SHARE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodStats {
    pub neighborhood: String,
    pub count: usize,
    #[serde(rename = "avgROI")]
    pub avg_roi: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeShare {
    pub property_type: PropertyType,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAnalytics {
    pub total_properties: usize,
    #[serde(rename = "avgROI")]
    pub avg_roi: f64,
    pub total_market_value: f64,
    pub top_opportunities: usize,
    pub neighborhoods: Vec<NeighborhoodStats>,
    pub property_types: Vec<TypeShare>,
    pub roi_distribution: Vec<BandCount>,
}

/// Number of properties whose arbitrage score reaches the top 5% cut-off.
///
/// The cut-off is the score of the `ceil(5% · n)`-th best property (at
/// least the best one), so ties at the cut-off are all counted.
pub fn top_opportunity_count(catalog: &[Property]) -> usize {
    if catalog.is_empty() {
        return 0;
    }
    let mut scores: Vec<f64> = catalog.iter().map(|p| p.arbitrage_score).collect();
    scores.sort_by(|a, b| b.total_cmp(a));
    let k = ((catalog.len() as f64 * TOP_OPPORTUNITY_SHARE).ceil() as usize).max(1);
    let cutoff = scores[k - 1];
    scores.iter().filter(|s| **s >= cutoff).count()
}

fn neighborhood_stats(catalog: &[Property]) -> Vec<NeighborhoodStats> {
    let mut by_name: HashMap<&str, Vec<f64>> = HashMap::new();
    for property in catalog {
        by_name
            .entry(property.neighborhood.as_str())
            .or_default()
            .push(property.predicted_roi);
    }

    let mut stats: Vec<NeighborhoodStats> = by_name
        .into_iter()
        .map(|(name, mut rois)| {
            rois.sort_by(|a, b| a.total_cmp(b));
            NeighborhoodStats {
                neighborhood: name.to_string(),
                count: rois.len(),
                avg_roi: mean(rois.iter().copied()),
                min: quantile(&rois, 0.0),
                q1: quantile(&rois, 0.25),
                median: quantile(&rois, 0.5),
                q3: quantile(&rois, 0.75),
                max: quantile(&rois, 1.0),
            }
        })
        .collect();
    stats.sort_by(|a, b| {
        b.avg_roi
            .total_cmp(&a.avg_roi)
            .then_with(|| a.neighborhood.cmp(&b.neighborhood))
    });
    stats
}

fn type_shares(catalog: &[Property]) -> Vec<TypeShare> {
    let total = catalog.len();
    PropertyType::ALL
        .into_iter()
        .map(|kind| {
            let count = catalog.iter().filter(|p| p.property_type == kind).count();
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            TypeShare {
                property_type: kind,
                count,
                percentage,
            }
        })
        .collect()
}

pub fn analyze(catalog: &[Property]) -> CatalogAnalytics {
    let rois: Vec<f64> = catalog.iter().map(|p| p.predicted_roi).collect();
    CatalogAnalytics {
        total_properties: catalog.len(),
        avg_roi: mean(rois.iter().copied()),
        total_market_value: catalog.iter().map(|p| p.price).sum(),
        top_opportunities: top_opportunity_count(catalog),
        neighborhoods: neighborhood_stats(catalog),
        property_types: type_shares(catalog),
        roi_distribution: roi_bands(&rois),
    }
}
