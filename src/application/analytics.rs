use crate::domain::analytics::{analyze, CatalogAnalytics};
use crate::domain::comparables::comparables;
use crate::domain::distribution::{percentile_rank, roi_histogram, HistogramBin};
use crate::domain::entities::property::Property;
use crate::domain::error::DomainError;
use crate::domain::ports::property_repository::PropertyRepository;
use serde::Serialize;
use std::sync::Arc;

/// Where a property's predicted ROI sits among its neighbors and the
/// whole catalog, as percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiPlacement {
    pub property_id: String,
    #[serde(rename = "predictedROI")]
    pub predicted_roi: f64,
    pub neighborhood: String,
    pub neighborhood_percentile: f64,
    pub catalog_percentile: f64,
}

pub struct AnalyticsUseCase {
    repo: Arc<dyn PropertyRepository>,
}

impl AnalyticsUseCase {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> Result<CatalogAnalytics, DomainError> {
        let catalog = self.repo.list()?;
        Ok(analyze(&catalog))
    }

    pub fn histogram(&self, bin_width: f64) -> Result<Vec<HistogramBin>, DomainError> {
        if !(bin_width > 0.0) {
            return Err(DomainError::InvalidInput(format!(
                "Bin width must be positive, got {bin_width}"
            )));
        }
        let rois: Vec<f64> = self.repo.list()?.iter().map(|p| p.predicted_roi).collect();
        Ok(roi_histogram(&rois, bin_width))
    }

    pub fn placement(&self, id: &str) -> Result<RoiPlacement, DomainError> {
        let catalog = self.repo.list()?;
        let subject = find(&catalog, id)?;
        let all: Vec<f64> = catalog.iter().map(|p| p.predicted_roi).collect();
        let local: Vec<f64> = catalog
            .iter()
            .filter(|p| p.neighborhood.eq_ignore_ascii_case(&subject.neighborhood))
            .map(|p| p.predicted_roi)
            .collect();
        Ok(RoiPlacement {
            property_id: subject.id.clone(),
            predicted_roi: subject.predicted_roi,
            neighborhood: subject.neighborhood.clone(),
            neighborhood_percentile: percentile_rank(subject.predicted_roi, &local),
            catalog_percentile: percentile_rank(subject.predicted_roi, &all),
        })
    }

    pub fn comparables(&self, id: &str, limit: usize) -> Result<Vec<Property>, DomainError> {
        let catalog = self.repo.list()?;
        let subject = find(&catalog, id)?;
        Ok(comparables(&catalog, subject, limit))
    }
}

fn find<'a>(catalog: &'a [Property], id: &str) -> Result<&'a Property, DomainError> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DomainError::NotFound(format!("Property not found: {id}")))
}
