//! Ranking of a filtered candidate set.
//!
//! Sorting is stable, so properties with equal keys keep their catalog
//! order. Keys are compared with `f64::total_cmp`, which gives a total order
//! even for malformed metrics.

use std::cmp::Ordering;

use crate::domain::entities::property::Property;
use crate::domain::values::sort_key::SortKey;

fn key(property: &Property, sort_by: SortKey) -> f64 {
    match sort_by {
        SortKey::ArbitrageScore => property.arbitrage_score,
        SortKey::PredictedRoi => property.predicted_roi,
        SortKey::Price => property.price,
        SortKey::PricePerSqm => property.price_per_sqm,
        SortKey::Size => property.size,
    }
}

pub fn compare(a: &Property, b: &Property, sort_by: SortKey) -> Ordering {
    let ascending = key(a, sort_by).total_cmp(&key(b, sort_by));
    if sort_by.is_descending() {
        ascending.reverse()
    } else {
        ascending
    }
}

pub fn sort_in_place(properties: &mut [Property], sort_by: SortKey) {
    properties.sort_by(|a, b| compare(a, b, sort_by));
}

/// Sorted copy of `properties`; the input is left untouched.
pub fn rank(properties: &[Property], sort_by: SortKey) -> Vec<Property> {
    let mut ranked = properties.to_vec();
    sort_in_place(&mut ranked, sort_by);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{ids, property};

    fn catalog() -> Vec<Property> {
        let mut a = property("a", 300_000.0);
        a.arbitrage_score = 0.7;
        a.predicted_roi = 6.0;
        a.size = 80.0;
        a.price_per_sqm = 3750.0;

        let mut b = property("b", 100_000.0);
        b.arbitrage_score = 0.9;
        b.predicted_roi = 9.0;
        b.size = 40.0;
        b.price_per_sqm = 2500.0;

        let mut c = property("c", 500_000.0);
        c.arbitrage_score = 0.7;
        c.predicted_roi = 7.0;
        c.size = 120.0;
        c.price_per_sqm = 4166.0;

        vec![a, b, c]
    }

    #[test]
    fn test_arbitrage_descending_with_stable_ties() {
        let ranked = rank(&catalog(), SortKey::ArbitrageScore);
        assert_eq!(ids(&ranked), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_roi_descending() {
        assert_eq!(ids(&rank(&catalog(), SortKey::PredictedRoi)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_price_ascending() {
        assert_eq!(ids(&rank(&catalog(), SortKey::Price)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_price_per_sqm_ascending() {
        assert_eq!(ids(&rank(&catalog(), SortKey::PricePerSqm)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_size_descending() {
        assert_eq!(ids(&rank(&catalog(), SortKey::Size)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let input = catalog();
        let _ = rank(&input, SortKey::Price);
        assert_eq!(ids(&input), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_resorting_is_a_no_op() {
        for key in [
            SortKey::ArbitrageScore,
            SortKey::PredictedRoi,
            SortKey::Price,
            SortKey::PricePerSqm,
            SortKey::Size,
        ] {
            let once = rank(&catalog(), key);
            let twice = rank(&once, key);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_nan_does_not_panic() {
        let mut input = catalog();
        input[0].arbitrage_score = f64::NAN;
        assert_eq!(rank(&input, SortKey::ArbitrageScore).len(), 3);
    }
}
