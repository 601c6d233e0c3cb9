use crate::domain::entities::property::{NewProperty, Property};
use crate::domain::error::DomainError;
use crate::domain::ports::property_repository::PropertyRepository;
use std::sync::Arc;

/// Admin CRUD over the property catalog. Every write is validated and has
/// its `price_per_sqm` recomputed.
pub struct CatalogUseCase {
    repo: Arc<dyn PropertyRepository>,
}

impl CatalogUseCase {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }

    pub fn create(&self, input: NewProperty) -> Result<Property, DomainError> {
        let property = input.into_property(uuid::Uuid::new_v4().to_string());
        property.validate()?;
        self.repo.save(&property)?;
        tracing::info!(id = %property.id, neighborhood = %property.neighborhood, "property created");
        Ok(property)
    }

    pub fn update(&self, id: &str, input: NewProperty) -> Result<Property, DomainError> {
        if self.repo.get(id)?.is_none() {
            return Err(DomainError::NotFound(format!("Property not found: {id}")));
        }
        let property = input.into_property(id.to_string());
        property.validate()?;
        self.repo.save(&property)?;
        tracing::info!(id = %id, "property updated");
        Ok(property)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id)?;
        tracing::info!(id = %id, "property deleted");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Property, DomainError> {
        self.repo
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Property not found: {id}")))
    }

    pub fn list(&self) -> Result<Vec<Property>, DomainError> {
        self.repo.list()
    }

    pub fn count(&self) -> Result<usize, DomainError> {
        self.repo.count()
    }
}
