//! Catalog → filter → rank → summarize.

use serde::Serialize;

use crate::domain::entities::property::Property;
use crate::domain::filtering::filter_properties;
use crate::domain::ranking::rank;
use crate::domain::summary::{summarize, Summary};
use crate::domain::values::filter_spec::FilterSpecification;

/// The ordered candidate set for one specification, with its summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub properties: Vec<Property>,
    pub summary: Summary,
}

impl RankedResult {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.id.as_str()).collect()
    }
}

pub fn evaluate(catalog: &[Property], spec: &FilterSpecification) -> RankedResult {
    let filtered = filter_properties(catalog, spec);
    let properties = rank(&filtered, spec.effective_sort());
    let summary = summarize(&properties);
    RankedResult {
        properties,
        summary,
    }
}
