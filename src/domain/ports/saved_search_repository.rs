use chrono::{DateTime, Utc};

use crate::domain::entities::saved_search::SavedSearch;
use crate::domain::error::DomainError;

pub trait SavedSearchRepository: Send + Sync {
    fn add(&self, search: &SavedSearch) -> Result<(), DomainError>;
    fn list(&self) -> Result<Vec<SavedSearch>, DomainError>;
    fn get(&self, id: &str) -> Result<Option<SavedSearch>, DomainError>;
    fn delete(&self, id: &str) -> Result<(), DomainError>;
    fn record_check(&self, id: &str, match_count: usize, at: DateTime<Utc>) -> Result<(), DomainError>;
}
