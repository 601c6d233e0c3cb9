use crate::domain::entities::property::Property;
use crate::domain::error::DomainError;

/// Where raw listings come from before they enter the catalog: a dataset
/// file, the property-unit REST API, or a test double.
#[async_trait::async_trait]
pub trait PropertySource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Property>, DomainError>;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}
