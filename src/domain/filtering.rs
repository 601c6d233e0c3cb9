//! Filter pipeline over the property catalog.
//!
//! Each constrained dimension of a [`FilterSpecification`] becomes one
//! [`Predicate`]; a property is kept when every active predicate matches.
//! Dimensions left unset produce no predicate at all, so they never exclude
//! anything.
//!
//! Property type, risk level and cluster lists are disjunctive (membership);
//! the feature list is conjunctive (every requested amenity must be present).

use crate::domain::entities::property::Property;
use crate::domain::values::feature::Feature;
use crate::domain::values::filter_spec::FilterSpecification;
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::range::NumericRange;
use crate::domain::values::risk_level::RiskLevel;

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'a> {
    Budget(NumericRange),
    RoiRange(NumericRange),
    TargetRoi(f64),
    Size(NumericRange),
    Rooms(NumericRange),
    PricePerSqm(NumericRange),
    PropertyTypes(&'a [PropertyType]),
    MinArbitrageScore(f64),
    RiskLevels(&'a [RiskLevel]),
    MaxRisk(RiskLevel),
    Features(&'a [Feature]),
    /// Lowercased search text.
    Neighborhood(String),
    Clusters(&'a [String]),
}

impl Predicate<'_> {
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Predicate::Budget(range) => range.contains(property.price),
            Predicate::RoiRange(range) => range.contains(property.predicted_roi),
            Predicate::TargetRoi(target) => property.predicted_roi >= *target,
            Predicate::Size(range) => range.contains(property.size),
            Predicate::Rooms(range) => range.contains(property.rooms as f64),
            Predicate::PricePerSqm(range) => range.contains(property.price_per_sqm),
            Predicate::PropertyTypes(types) => types.contains(&property.property_type),
            Predicate::MinArbitrageScore(min) => property.arbitrage_score >= *min,
            Predicate::RiskLevels(levels) => levels.contains(&property.risk_indicator),
            Predicate::MaxRisk(ceiling) => property.risk_indicator.is_at_most(*ceiling),
            Predicate::Features(features) => property.features.has_all(features),
            Predicate::Neighborhood(needle) => {
                property.neighborhood.to_lowercase().contains(needle.as_str())
            }
            Predicate::Clusters(ids) => property
                .cluster_id
                .as_ref()
                .map_or(false, |id| ids.contains(id)),
        }
    }
}

/// Predicates for every constrained dimension of `spec`.
///
/// A non-empty `risk_levels` list takes precedence over `max_risk`; the
/// latter only applies when no levels are listed.
pub fn active_predicates(spec: &FilterSpecification) -> Vec<Predicate<'_>> {
    let mut predicates = Vec::new();

    if let Some(range) = spec.budget.filter(|r| !r.is_unbounded()) {
        predicates.push(Predicate::Budget(range));
    }
    if let Some(range) = spec.roi_range.filter(|r| !r.is_unbounded()) {
        predicates.push(Predicate::RoiRange(range));
    }
    if let Some(target) = spec.target_roi {
        predicates.push(Predicate::TargetRoi(target));
    }
    if let Some(range) = spec.size.filter(|r| !r.is_unbounded()) {
        predicates.push(Predicate::Size(range));
    }
    if let Some(range) = spec.rooms.filter(|r| !r.is_unbounded()) {
        predicates.push(Predicate::Rooms(range));
    }
    if let Some(range) = spec.price_per_sqm.filter(|r| !r.is_unbounded()) {
        predicates.push(Predicate::PricePerSqm(range));
    }
    if !spec.property_types.is_empty() {
        predicates.push(Predicate::PropertyTypes(&spec.property_types));
    }
    if let Some(min) = spec.min_arbitrage_score {
        predicates.push(Predicate::MinArbitrageScore(min));
    }
    if !spec.risk_levels.is_empty() {
        predicates.push(Predicate::RiskLevels(&spec.risk_levels));
    } else if let Some(ceiling) = spec.max_risk {
        predicates.push(Predicate::MaxRisk(ceiling));
    }
    if !spec.features.is_empty() {
        predicates.push(Predicate::Features(&spec.features));
    }
    if let Some(text) = spec.neighborhood() {
        predicates.push(Predicate::Neighborhood(text.to_lowercase()));
    }
    if !spec.clusters.is_empty() {
        predicates.push(Predicate::Clusters(&spec.clusters));
    }

    predicates
}

pub fn matches(spec: &FilterSpecification, property: &Property) -> bool {
    active_predicates(spec).iter().all(|p| p.matches(property))
}

/// Properties satisfying `spec`, in catalog order.
pub fn filter_properties(catalog: &[Property], spec: &FilterSpecification) -> Vec<Property> {
    let predicates = active_predicates(spec);
    catalog
        .iter()
        .filter(|property| predicates.iter().all(|p| p.matches(property)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{ids, property};

    fn catalog() -> Vec<Property> {
        let mut a = property("a", 100_000.0);
        a.predicted_roi = 5.0;
        a.arbitrage_score = 0.95;
        a.risk_indicator = RiskLevel::Low;
        a.rooms = 1;
        a.property_type = PropertyType::Studio;
        a.features.elevator = true;
        a.neighborhood = "Chamberí".into();
        a.cluster_id = Some("c1".into());

        let mut b = property("b", 300_000.0);
        b.predicted_roi = 8.0;
        b.arbitrage_score = 0.80;
        b.risk_indicator = RiskLevel::Medium;
        b.rooms = 3;
        b.features.elevator = true;
        b.features.parking = true;
        b.neighborhood = "Salamanca".into();
        b.cluster_id = Some("c2".into());

        let mut c = property("c", 500_000.0);
        c.predicted_roi = 9.5;
        c.arbitrage_score = 0.60;
        c.risk_indicator = RiskLevel::High;
        c.rooms = 4;
        c.size = 120.0;
        c.property_type = PropertyType::House;
        c.neighborhood = "Centro".into();

        vec![a, b, c]
    }

    #[test]
    fn test_empty_spec_keeps_everything_in_order() {
        let result = filter_properties(&catalog(), &FilterSpecification::new());
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_budget_min_only() {
        let spec = FilterSpecification::new().with_budget(NumericRange::at_least(200_000.0));
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["b", "c"]);
    }

    #[test]
    fn test_inverted_budget_matches_nothing() {
        let spec = FilterSpecification::new().with_budget(NumericRange::between(400_000.0, 200_000.0));
        assert!(filter_properties(&catalog(), &spec).is_empty());
    }

    #[test]
    fn test_target_roi_and_range_both_apply() {
        let spec = FilterSpecification::new()
            .with_target_roi(6.0)
            .with_roi_range(NumericRange::at_most(9.0));
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["b"]);
    }

    #[test]
    fn test_rooms_and_size() {
        let spec = FilterSpecification::new().with_rooms(NumericRange::between(2.0, 4.0));
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["b", "c"]);

        let spec = FilterSpecification::new().with_size(NumericRange::at_least(100.0));
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["c"]);
    }

    #[test]
    fn test_property_type_is_membership() {
        let spec = FilterSpecification::new()
            .with_property_types(vec![PropertyType::Studio, PropertyType::House]);
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["a", "c"]);
    }

    #[test]
    fn test_max_risk_uses_ordinal_rank() {
        let spec = FilterSpecification::new().with_max_risk(RiskLevel::Medium);
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["a", "b"]);
    }

    #[test]
    fn test_risk_levels_take_precedence_over_max_risk() {
        let spec = FilterSpecification::new()
            .with_risk_levels(vec![RiskLevel::Low])
            .with_max_risk(RiskLevel::High);
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["a"]);
        assert!(!active_predicates(&spec)
            .iter()
            .any(|p| matches!(p, Predicate::MaxRisk(_))));
    }

    #[test]
    fn test_features_are_conjunctive() {
        let spec = FilterSpecification::new().with_features(vec![Feature::Elevator]);
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["a", "b"]);

        let spec = FilterSpecification::new().with_features(vec![Feature::Elevator, Feature::Parking]);
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["b"]);
    }

    #[test]
    fn test_neighborhood_is_case_insensitive_substring() {
        let spec = FilterSpecification::new().with_neighborhood("SALA");
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["b"]);

        let spec = FilterSpecification::new().with_neighborhood("chamb");
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["a"]);
    }

    #[test]
    fn test_unclustered_never_match_cluster_filter() {
        let spec = FilterSpecification::new().with_clusters(vec!["c1".into(), "c2".into()]);
        assert_eq!(ids(&filter_properties(&catalog(), &spec)), vec!["a", "b"]);
    }

    #[test]
    fn test_zero_arbitrage_floor_is_active() {
        let mut catalog = catalog();
        catalog[2].arbitrage_score = -0.1;
        let spec = FilterSpecification::new().with_min_arbitrage_score(0.0);
        assert_eq!(ids(&filter_properties(&catalog, &spec)), vec!["a", "b"]);
    }

    #[test]
    fn test_only_constrained_dimensions_produce_predicates() {
        let spec = FilterSpecification::new()
            .with_budget(NumericRange::default())
            .with_neighborhood("")
            .with_min_arbitrage_score(0.5);
        assert_eq!(active_predicates(&spec), vec![Predicate::MinArbitrageScore(0.5)]);
    }

    #[test]
    fn test_zero_size_record_passes_through() {
        let mut broken = property("z", 100_000.0);
        broken.size = 0.0;
        broken.price_per_sqm = 0.0;
        let spec = FilterSpecification::new().with_price_per_sqm(NumericRange::at_most(1000.0));
        assert_eq!(ids(&filter_properties(&[broken], &spec)), vec!["z"]);
    }
}
