use crate::domain::entities::property::Property;
use crate::domain::error::DomainError;

/// Persistent property catalog.
///
/// `list` returns properties in insertion order; that order is the catalog
/// order ranking falls back on for ties.
pub trait PropertyRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Property>, DomainError>;
    fn get(&self, id: &str) -> Result<Option<Property>, DomainError>;
    /// Insert, or replace the property with the same id in place.
    fn save(&self, property: &Property) -> Result<(), DomainError>;
    fn delete(&self, id: &str) -> Result<(), DomainError>;
    fn count(&self) -> Result<usize, DomainError>;
}
