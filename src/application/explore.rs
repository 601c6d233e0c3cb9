use crate::domain::error::DomainError;
use crate::domain::pipeline::{evaluate, RankedResult};
use crate::domain::ports::property_repository::PropertyRepository;
use crate::domain::values::filter_spec::FilterSpecification;
use std::sync::Arc;

pub struct ExploreUseCase {
    repo: Arc<dyn PropertyRepository>,
}

impl ExploreUseCase {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, spec: &FilterSpecification) -> Result<RankedResult, DomainError> {
        let catalog = self.repo.list()?;
        let result = evaluate(&catalog, spec);
        tracing::debug!(
            catalog = catalog.len(),
            matched = result.summary.count,
            active_filters = spec.active_filter_count(),
            sort = %spec.effective_sort(),
            "explore evaluated"
        );
        Ok(result)
    }
}
