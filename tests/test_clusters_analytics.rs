mod common;

use common::{ids, property, setup, setup_with};
use estatelens::domain::entities::property::Property;
use estatelens::domain::error::DomainError;
use estatelens::domain::values::property_type::PropertyType;

fn clustered(id: &str, cluster: &str, label: Option<&str>, neighborhood: &str, roi: f64) -> Property {
    let mut p = property(id, 200_000.0);
    p.cluster_id = Some(cluster.into());
    p.cluster_label = label.map(String::from);
    p.neighborhood = neighborhood.into();
    p.predicted_roi = roi;
    p
}

#[test]
fn test_clusters_in_first_seen_order() {
    let lens = setup_with(&[
        clustered("a", "growth", Some("High growth"), "Tetuán", 9.0),
        property("free", 150_000.0),
        clustered("b", "value", None, "Usera", 6.0),
        clustered("c", "growth", Some("ignored label"), "Chamberí", 7.0),
    ]);
    let clusters = lens.clusters().unwrap();
    assert_eq!(clusters.len(), 2);

    assert_eq!(clusters[0].id, "growth");
    assert_eq!(clusters[0].label, "High growth");
    assert_eq!(clusters[0].property_count, 2);
    assert!((clusters[0].avg_roi - 8.0).abs() < 1e-9);
    assert_eq!(clusters[0].top_neighborhoods, vec!["Tetuán", "Chamberí"]);

    assert_eq!(clusters[1].id, "value");
    assert_eq!(clusters[1].label, "Cluster value");
}

#[test]
fn test_no_clusters_without_clustered_properties() {
    let lens = setup_with(&[property("a", 1.0), property("b", 2.0)]);
    assert!(lens.clusters().unwrap().is_empty());
}

#[test]
fn test_analytics_on_empty_catalog() {
    let analytics = setup().analytics().unwrap();
    assert_eq!(analytics.total_properties, 0);
    assert_eq!(analytics.avg_roi, 0.0);
    assert_eq!(analytics.top_opportunities, 0);
    assert!(analytics.neighborhoods.is_empty());
    assert_eq!(analytics.roi_distribution.len(), 7);
    assert!(analytics.roi_distribution.iter().all(|b| b.count == 0));
}

#[test]
fn test_analytics_totals_and_neighborhoods() {
    let mut catalog = Vec::new();
    for (i, (hood, roi)) in [("Retiro", 6.0), ("Retiro", 8.0), ("Usera", 9.5), ("Usera", 10.5)]
        .into_iter()
        .enumerate()
    {
        let mut p = property(&format!("p{i}"), 100_000.0 * (i + 1) as f64);
        p.neighborhood = hood.into();
        p.predicted_roi = roi;
        p.arbitrage_score = 0.1 * (i + 1) as f64;
        if i == 3 {
            p.property_type = PropertyType::House;
        }
        catalog.push(p);
    }
    let analytics = setup_with(&catalog).analytics().unwrap();

    assert_eq!(analytics.total_properties, 4);
    assert_eq!(analytics.total_market_value, 1_000_000.0);
    assert_eq!(analytics.top_opportunities, 1);
    assert_eq!(analytics.neighborhoods[0].neighborhood, "Usera");
    assert_eq!(analytics.neighborhoods[0].median, 10.0);
    assert_eq!(analytics.neighborhoods[1].min, 6.0);
    assert_eq!(analytics.neighborhoods[1].max, 8.0);

    let house = analytics
        .property_types
        .iter()
        .find(|t| t.property_type == PropertyType::House)
        .unwrap();
    assert_eq!(house.count, 1);
    assert_eq!(house.percentage, 25.0);

    let bands: Vec<(&str, usize)> = analytics
        .roi_distribution
        .iter()
        .map(|b| (b.range.as_str(), b.count))
        .collect();
    assert!(bands.contains(&("6-7%", 1)));
    assert!(bands.contains(&("8-9%", 1)));
    assert!(bands.contains(&("9-10%", 1)));
    assert!(bands.contains(&("10%+", 1)));
}

#[test]
fn test_histogram_and_placement() {
    let mut catalog = Vec::new();
    for (i, (hood, roi)) in [("Retiro", 6.0), ("Retiro", 7.0), ("Retiro", 8.0), ("Usera", 9.0)]
        .into_iter()
        .enumerate()
    {
        let mut p = property(&format!("p{i}"), 200_000.0);
        p.neighborhood = hood.into();
        p.predicted_roi = roi;
        catalog.push(p);
    }
    let lens = setup_with(&catalog);

    let bins = lens.roi_histogram(1.0).unwrap();
    let labels: Vec<&str> = bins.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["6.0%", "7.0%", "8.0%", "9.0%"]);
    assert!(matches!(lens.roi_histogram(0.0), Err(DomainError::InvalidInput(_))));

    let placement = lens.roi_placement("p1").unwrap();
    assert!((placement.neighborhood_percentile - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(placement.catalog_percentile, 50.0);
    assert!(matches!(lens.roi_placement("missing"), Err(DomainError::NotFound(_))));
}

#[test]
fn test_comparables_same_neighborhood_and_type() {
    let subject = property("subject", 400_000.0);
    let close = property("close", 410_000.0);
    let far = property("far", 200_000.0);
    let mut other_type = property("house", 400_000.0);
    other_type.property_type = PropertyType::House;
    let mut other_hood = property("elsewhere", 400_000.0);
    other_hood.neighborhood = "Vallecas".into();

    let lens = setup_with(&[far, subject, other_type, other_hood, close]);
    let found = lens.comparables("subject", 5).unwrap();
    assert_eq!(ids(&found), vec!["close", "far"]);
    assert_eq!(ids(&lens.comparables("subject", 1).unwrap()), vec!["close"]);
}
