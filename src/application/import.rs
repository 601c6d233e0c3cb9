use crate::domain::error::DomainError;
use crate::domain::ports::property_repository::PropertyRepository;
use crate::domain::ports::property_source::PropertySource;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub fetched: usize,
    pub imported: usize,
    pub skipped: usize,
}

pub struct ImportUseCase {
    repo: Arc<dyn PropertyRepository>,
}

impl ImportUseCase {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    /// Pulls every record from `source` and upserts the valid ones by id.
    /// Records failing validation are skipped, not fatal.
    pub async fn execute(&self, source: &dyn PropertySource) -> Result<ImportReport, DomainError> {
        let records = source.fetch().await?;
        let mut report = ImportReport {
            fetched: records.len(),
            ..Default::default()
        };

        for record in records {
            let property = record.normalized();
            if let Err(e) = property.validate() {
                tracing::warn!(source = source.name(), id = %property.id, error = %e, "skipping invalid record");
                report.skipped += 1;
                continue;
            }
            self.repo.save(&property)?;
            report.imported += 1;
        }

        tracing::info!(
            source = source.name(),
            fetched = report.fetched,
            imported = report.imported,
            skipped = report.skipped,
            "import finished"
        );
        Ok(report)
    }
}
