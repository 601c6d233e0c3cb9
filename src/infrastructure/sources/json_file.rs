use std::path::PathBuf;

use crate::domain::entities::property::Property;
use crate::domain::error::DomainError;
use crate::domain::ports::property_source::PropertySource;
use async_trait::async_trait;

/// A static dataset: a JSON array of properties in catalog schema.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<Property>, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Source(format!("Cannot read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::Parse(format!("Invalid dataset {}: {e}", self.path.display()))
        })
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}
