//! Declarative filter/sort request evaluated against the property catalog.
//!
//! A [`FilterSpecification`] is sparse: every dimension is optional and an
//! absent dimension imposes no constraint. The JSON form follows the
//! dashboard's filter document (camelCase keys, `location.neighborhood`), so
//! saved searches and CLI input accept what the filter panel produces.
//!
//! Specifications are values. Edits go through [`FilterSpecification::apply`]
//! or the `with_*`/`toggle_*` helpers, which all return a new specification.

use serde::{Deserialize, Serialize};

use crate::domain::values::feature::Feature;
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::range::NumericRange;
use crate::domain::values::risk_level::RiskLevel;
use crate::domain::values::sort_key::SortKey;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<NumericRange>,
    #[serde(default, rename = "targetROI", skip_serializing_if = "Option::is_none")]
    pub target_roi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi_range: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_risk: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_levels: Vec<RiskLevel>,
    /// Months; consumed by scenario simulation, not by filtering.
    #[serde(default, rename = "holdingPeriod", skip_serializing_if = "Option::is_none")]
    pub holding_period_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<NumericRange>,
    #[serde(default, rename = "propertyType", skip_serializing_if = "Vec::is_empty")]
    pub property_types: Vec<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_sqm: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_arbitrage_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
}

/// A single-field edit to a [`FilterSpecification`].
///
/// `None` / an empty list clears the dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Neighborhood(Option<String>),
    Budget(Option<NumericRange>),
    TargetRoi(Option<f64>),
    RoiRange(Option<NumericRange>),
    MaxRisk(Option<RiskLevel>),
    RiskLevels(Vec<RiskLevel>),
    HoldingPeriod(Option<u32>),
    Size(Option<NumericRange>),
    PropertyTypes(Vec<PropertyType>),
    Rooms(Option<NumericRange>),
    PricePerSqm(Option<NumericRange>),
    MinArbitrageScore(Option<f64>),
    Clusters(Vec<String>),
    Features(Vec<Feature>),
    SortBy(Option<SortKey>),
}

impl FilterSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid filter specification: {e}"))
    }

    /// Sort key in effect: the requested one, or arbitrage score.
    pub fn effective_sort(&self) -> SortKey {
        self.sort_by.unwrap_or_default()
    }

    /// Neighborhood search text, if non-empty.
    pub fn neighborhood(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.neighborhood.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Return a copy with one dimension replaced.
    pub fn apply(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Neighborhood(text) => {
                next.location = text.map(|n| LocationFilter {
                    neighborhood: Some(n),
                });
            }
            FilterUpdate::Budget(range) => next.budget = normalize_range(range),
            FilterUpdate::TargetRoi(value) => next.target_roi = value,
            FilterUpdate::RoiRange(range) => next.roi_range = normalize_range(range),
            FilterUpdate::MaxRisk(level) => next.max_risk = level,
            FilterUpdate::RiskLevels(levels) => next.risk_levels = levels,
            FilterUpdate::HoldingPeriod(months) => next.holding_period_months = months,
            FilterUpdate::Size(range) => next.size = normalize_range(range),
            FilterUpdate::PropertyTypes(types) => next.property_types = types,
            FilterUpdate::Rooms(range) => next.rooms = normalize_range(range),
            FilterUpdate::PricePerSqm(range) => next.price_per_sqm = normalize_range(range),
            FilterUpdate::MinArbitrageScore(value) => next.min_arbitrage_score = value,
            FilterUpdate::Clusters(ids) => next.clusters = ids,
            FilterUpdate::Features(features) => next.features = features,
            FilterUpdate::SortBy(key) => next.sort_by = key,
        }
        next
    }

    /// Apply several updates in order.
    pub fn apply_all(&self, updates: impl IntoIterator<Item = FilterUpdate>) -> Self {
        updates
            .into_iter()
            .fold(self.clone(), |spec, update| spec.apply(update))
    }

    pub fn with_budget(self, range: NumericRange) -> Self {
        self.apply(FilterUpdate::Budget(Some(range)))
    }

    pub fn with_roi_range(self, range: NumericRange) -> Self {
        self.apply(FilterUpdate::RoiRange(Some(range)))
    }

    pub fn with_target_roi(self, roi: f64) -> Self {
        self.apply(FilterUpdate::TargetRoi(Some(roi)))
    }

    pub fn with_size(self, range: NumericRange) -> Self {
        self.apply(FilterUpdate::Size(Some(range)))
    }

    pub fn with_rooms(self, range: NumericRange) -> Self {
        self.apply(FilterUpdate::Rooms(Some(range)))
    }

    pub fn with_price_per_sqm(self, range: NumericRange) -> Self {
        self.apply(FilterUpdate::PricePerSqm(Some(range)))
    }

    pub fn with_property_types(self, types: Vec<PropertyType>) -> Self {
        self.apply(FilterUpdate::PropertyTypes(types))
    }

    pub fn with_min_arbitrage_score(self, score: f64) -> Self {
        self.apply(FilterUpdate::MinArbitrageScore(Some(score)))
    }

    pub fn with_max_risk(self, level: RiskLevel) -> Self {
        self.apply(FilterUpdate::MaxRisk(Some(level)))
    }

    pub fn with_risk_levels(self, levels: Vec<RiskLevel>) -> Self {
        self.apply(FilterUpdate::RiskLevels(levels))
    }

    pub fn with_features(self, features: Vec<Feature>) -> Self {
        self.apply(FilterUpdate::Features(features))
    }

    pub fn with_neighborhood(self, text: impl Into<String>) -> Self {
        self.apply(FilterUpdate::Neighborhood(Some(text.into())))
    }

    pub fn with_clusters(self, ids: Vec<String>) -> Self {
        self.apply(FilterUpdate::Clusters(ids))
    }

    pub fn with_sort(self, key: SortKey) -> Self {
        self.apply(FilterUpdate::SortBy(Some(key)))
    }

    pub fn toggle_property_type(&self, property_type: PropertyType) -> Self {
        self.apply(FilterUpdate::PropertyTypes(toggled(
            &self.property_types,
            property_type,
        )))
    }

    pub fn toggle_risk_level(&self, level: RiskLevel) -> Self {
        self.apply(FilterUpdate::RiskLevels(toggled(&self.risk_levels, level)))
    }

    pub fn toggle_feature(&self, feature: Feature) -> Self {
        self.apply(FilterUpdate::Features(toggled(&self.features, feature)))
    }

    pub fn toggle_cluster(&self, cluster_id: &str) -> Self {
        self.apply(FilterUpdate::Clusters(toggled(
            &self.clusters,
            cluster_id.to_string(),
        )))
    }

    /// Drop every constraint and the sort preference.
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Number of constrained dimensions, counted the way the filter panel
    /// badges them (a range counts once whichever bounds are set).
    pub fn active_filter_count(&self) -> usize {
        let ranges = [
            &self.budget,
            &self.roi_range,
            &self.size,
            &self.rooms,
            &self.price_per_sqm,
        ];
        let mut count = ranges
            .iter()
            .filter(|r| r.map_or(false, |r| !r.is_unbounded()))
            .count();
        count += [self.target_roi, self.min_arbitrage_score]
            .iter()
            .filter(|v| v.is_some())
            .count();
        count += usize::from(self.max_risk.is_some());
        count += [
            self.property_types.is_empty(),
            self.risk_levels.is_empty(),
            self.features.is_empty(),
            self.clusters.is_empty(),
        ]
        .iter()
        .filter(|empty| !**empty)
        .count();
        count += usize::from(self.neighborhood().is_some());
        count
    }

    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }
}

fn normalize_range(range: Option<NumericRange>) -> Option<NumericRange> {
    range.filter(|r| !r.is_unbounded())
}

fn toggled<T: PartialEq + Clone>(current: &[T], item: T) -> Vec<T> {
    if current.contains(&item) {
        current.iter().filter(|x| **x != item).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(item);
        next
    }
}
