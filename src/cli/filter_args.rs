use clap::Args;

use crate::domain::values::feature::Feature;
use crate::domain::values::filter_spec::{FilterSpecification, FilterUpdate};
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::range::NumericRange;
use crate::domain::values::risk_level::RiskLevel;
use crate::domain::values::sort_key::SortKey;

/// Filter flags shared by `explore` and `search-save`. Flags are layered on
/// top of `--spec`, so a saved dashboard filter can be tweaked per run.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter document as JSON (dashboard PropertyFilters format)
    #[arg(long)]
    pub spec: Option<String>,
    /// Case-insensitive neighborhood substring
    #[arg(long)]
    pub neighborhood: Option<String>,
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    #[arg(long)]
    pub min_roi: Option<f64>,
    #[arg(long)]
    pub max_roi: Option<f64>,
    /// Predicted ROI floor, applied on top of the ROI range
    #[arg(long)]
    pub target_roi: Option<f64>,
    #[arg(long)]
    pub min_size: Option<f64>,
    #[arg(long)]
    pub max_size: Option<f64>,
    #[arg(long)]
    pub min_rooms: Option<f64>,
    #[arg(long)]
    pub max_rooms: Option<f64>,
    #[arg(long)]
    pub min_price_per_sqm: Option<f64>,
    #[arg(long)]
    pub max_price_per_sqm: Option<f64>,
    /// Property type (apartment, house, studio); repeatable
    #[arg(long = "type")]
    pub property_types: Vec<PropertyType>,
    #[arg(long)]
    pub min_arbitrage: Option<f64>,
    /// Highest acceptable risk (low, medium, high)
    #[arg(long)]
    pub max_risk: Option<RiskLevel>,
    /// Accepted risk level; repeatable, takes precedence over --max-risk
    #[arg(long = "risk")]
    pub risk_levels: Vec<RiskLevel>,
    /// Required amenity (e.g. elevator, hasParking); repeatable
    #[arg(long = "feature")]
    pub features: Vec<Feature>,
    /// Cluster id; repeatable
    #[arg(long = "cluster")]
    pub clusters: Vec<String>,
    /// Holding period in months
    #[arg(long)]
    pub holding_period: Option<u32>,
    /// arbitrageScore, predictedROI, price, pricePerSqm or size
    #[arg(long)]
    pub sort: Option<SortKey>,
}

/// `None` when neither flag is given; otherwise the existing range with the
/// given bounds replaced.
fn merged_range(existing: Option<NumericRange>, min: Option<f64>, max: Option<f64>) -> Option<Option<NumericRange>> {
    if min.is_none() && max.is_none() {
        return None;
    }
    let base = existing.unwrap_or_default();
    Some(Some(NumericRange::new(min.or(base.min), max.or(base.max))))
}

impl FilterArgs {
    /// The specification these flags describe.
    pub fn to_spec(&self) -> Result<FilterSpecification, String> {
        let base = match &self.spec {
            Some(json) => FilterSpecification::from_json(json)?,
            None => FilterSpecification::new(),
        };
        Ok(base.apply_all(self.updates(&base)))
    }

    fn updates(&self, base: &FilterSpecification) -> Vec<FilterUpdate> {
        let mut updates = Vec::new();
        if let Some(text) = &self.neighborhood {
            updates.push(FilterUpdate::Neighborhood(Some(text.clone())));
        }
        if let Some(r) = merged_range(base.budget, self.min_price, self.max_price) {
            updates.push(FilterUpdate::Budget(r));
        }
        if let Some(r) = merged_range(base.roi_range, self.min_roi, self.max_roi) {
            updates.push(FilterUpdate::RoiRange(r));
        }
        if let Some(roi) = self.target_roi {
            updates.push(FilterUpdate::TargetRoi(Some(roi)));
        }
        if let Some(r) = merged_range(base.size, self.min_size, self.max_size) {
            updates.push(FilterUpdate::Size(r));
        }
        if let Some(r) = merged_range(base.rooms, self.min_rooms, self.max_rooms) {
            updates.push(FilterUpdate::Rooms(r));
        }
        if let Some(r) = merged_range(base.price_per_sqm, self.min_price_per_sqm, self.max_price_per_sqm) {
            updates.push(FilterUpdate::PricePerSqm(r));
        }
        if !self.property_types.is_empty() {
            updates.push(FilterUpdate::PropertyTypes(self.property_types.clone()));
        }
        if let Some(score) = self.min_arbitrage {
            updates.push(FilterUpdate::MinArbitrageScore(Some(score)));
        }
        if let Some(level) = self.max_risk {
            updates.push(FilterUpdate::MaxRisk(Some(level)));
        }
        if !self.risk_levels.is_empty() {
            updates.push(FilterUpdate::RiskLevels(self.risk_levels.clone()));
        }
        if !self.features.is_empty() {
            updates.push(FilterUpdate::Features(self.features.clone()));
        }
        if !self.clusters.is_empty() {
            updates.push(FilterUpdate::Clusters(self.clusters.clone()));
        }
        if let Some(months) = self.holding_period {
            updates.push(FilterUpdate::HoldingPeriod(Some(months)));
        }
        if let Some(key) = self.sort {
            updates.push(FilterUpdate::SortBy(Some(key)));
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_empty_spec() {
        let spec = FilterArgs::default().to_spec().unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_flags_override_json_bounds_one_side_at_a_time() {
        let args = FilterArgs {
            spec: Some(r#"{"budget": {"min": 100000, "max": 400000}}"#.into()),
            max_price: Some(250_000.0),
            features: vec![Feature::Elevator],
            ..Default::default()
        };
        let spec = args.to_spec().unwrap();
        assert_eq!(spec.budget, Some(NumericRange::between(100_000.0, 250_000.0)));
        assert_eq!(spec.features, vec![Feature::Elevator]);
    }

    #[test]
    fn test_zero_bound_is_kept() {
        let args = FilterArgs {
            min_roi: Some(0.0),
            ..Default::default()
        };
        assert_eq!(args.to_spec().unwrap().roi_range, Some(NumericRange::at_least(0.0)));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let args = FilterArgs {
            spec: Some("{not json".into()),
            ..Default::default()
        };
        assert!(args.to_spec().is_err());
    }
}
