//! Per-cluster aggregates over the catalog.
//!
//! Groups appear in the order their first member appears in the catalog.
//! Properties without a `cluster_id` belong to no group; a catalog with no
//! clustered properties yields an empty list.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::domain::entities::property::Property;
use crate::domain::summary::mean;
use crate::domain::values::property_type::PropertyType;

const CLUSTER_DESCRIPTION: &str = "Properties with similar characteristics and investment profiles";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub id: String,
    pub label: String,
    pub description: String,
    pub property_count: usize,
    #[serde(rename = "avgROI")]
    pub avg_roi: f64,
    pub avg_arbitrage_score: f64,
    pub avg_price: f64,
    pub avg_price_per_sqm: f64,
    pub common_types: Vec<PropertyType>,
    pub top_neighborhoods: Vec<String>,
}

/// The `n` most frequent values; equal counts keep first-seen order.
pub fn most_frequent<T, I>(values: I, n: usize) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut order: Vec<(T, usize)> = Vec::new();
    let mut index: HashMap<T, usize> = HashMap::new();
    for value in values {
        match index.get(&value) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(value.clone(), order.len());
                order.push((value, 1));
            }
        }
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().take(n).map(|(value, _)| value).collect()
}

/// `members` is non-empty; the label is the first member's, when set.
fn summarize_cluster(id: &str, members: &[&Property]) -> ClusterSummary {
    let label = members
        .first()
        .and_then(|p| p.cluster_label.as_deref())
        .filter(|l| !l.is_empty())
        .map_or_else(|| format!("Cluster {id}"), str::to_string);

    ClusterSummary {
        id: id.to_string(),
        label,
        description: CLUSTER_DESCRIPTION.to_string(),
        property_count: members.len(),
        avg_roi: mean(members.iter().map(|p| p.predicted_roi)),
        avg_arbitrage_score: mean(members.iter().map(|p| p.arbitrage_score)),
        avg_price: mean(members.iter().map(|p| p.price)),
        avg_price_per_sqm: mean(members.iter().map(|p| p.price_per_sqm)),
        common_types: most_frequent(members.iter().map(|p| p.property_type), 2),
        top_neighborhoods: most_frequent(members.iter().map(|p| p.neighborhood.clone()), 3),
    }
}

pub fn aggregate_clusters(catalog: &[Property]) -> Vec<ClusterSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Property>> = HashMap::new();

    for property in catalog {
        if let Some(id) = property.cluster_id.as_deref() {
            groups
                .entry(id)
                .or_insert_with(|| {
                    order.push(id);
                    Vec::new()
                })
                .push(property);
        }
    }

    order
        .into_iter()
        .map(|id| summarize_cluster(id, &groups[id]))
        .collect()
}

/// Mean ROI across clusters, weighted by member count.
pub fn overall_avg_roi(clusters: &[ClusterSummary]) -> f64 {
    let total: usize = clusters.iter().map(|c| c.property_count).sum();
    if total == 0 {
        return 0.0;
    }
    clusters
        .iter()
        .map(|c| c.avg_roi * c.property_count as f64)
        .sum::<f64>()
        / total as f64
}
