use crate::domain::clusters::{aggregate_clusters, ClusterSummary};
use crate::domain::error::DomainError;
use crate::domain::ports::property_repository::PropertyRepository;
use std::sync::Arc;

pub struct ClustersUseCase {
    repo: Arc<dyn PropertyRepository>,
}

impl ClustersUseCase {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> Result<Vec<ClusterSummary>, DomainError> {
        let catalog = self.repo.list()?;
        Ok(aggregate_clusters(&catalog))
    }
}
