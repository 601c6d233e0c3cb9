use crate::domain::entities::property::Property;
use crate::domain::entities::saved_search::SavedSearch;
use crate::domain::error::DomainError;
use crate::domain::filtering::filter_properties;
use crate::domain::ports::property_repository::PropertyRepository;
use crate::domain::ports::saved_search_repository::SavedSearchRepository;
use crate::domain::values::filter_spec::FilterSpecification;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAlert {
    pub search_id: String,
    pub name: String,
    pub match_count: usize,
    /// Matches gained since the previous check; absent on the first check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_matches: Option<usize>,
}

pub struct SavedSearchUseCase {
    searches: Arc<dyn SavedSearchRepository>,
    properties: Arc<dyn PropertyRepository>,
}

impl SavedSearchUseCase {
    pub fn new(searches: Arc<dyn SavedSearchRepository>, properties: Arc<dyn PropertyRepository>) -> Self {
        Self { searches, properties }
    }

    pub fn save(&self, name: String, spec: FilterSpecification) -> Result<SavedSearch, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Saved search name is empty".into()));
        }
        let search = SavedSearch::new(name, spec);
        self.searches.add(&search)?;
        tracing::info!(id = %search.id, name = %search.name, "saved search created");
        Ok(search)
    }

    pub fn list(&self) -> Result<Vec<SavedSearch>, DomainError> {
        self.searches.list()
    }

    pub fn get(&self, id: &str) -> Result<SavedSearch, DomainError> {
        self.searches
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Saved search not found: {id}")))
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.searches.delete(id)
    }

    pub fn check(&self, id: &str) -> Result<SearchAlert, DomainError> {
        let search = self.get(id)?;
        let catalog = self.properties.list()?;
        self.check_against(search, &catalog)
    }

    /// Checks every saved search against one catalog snapshot.
    pub fn check_all(&self) -> Result<Vec<SearchAlert>, DomainError> {
        let catalog = self.properties.list()?;
        self.searches
            .list()?
            .into_iter()
            .map(|search| self.check_against(search, &catalog))
            .collect()
    }

    fn check_against(&self, search: SavedSearch, catalog: &[Property]) -> Result<SearchAlert, DomainError> {
        let match_count = filter_properties(catalog, &search.spec).len();
        let new_matches = search.new_matches(match_count);
        self.searches.record_check(&search.id, match_count, Utc::now())?;
        if new_matches.unwrap_or(0) > 0 {
            tracing::info!(id = %search.id, name = %search.name, new = ?new_matches, "saved search has new matches");
        }
        Ok(SearchAlert {
            search_id: search.id,
            name: search.name,
            match_count,
            new_matches,
        })
    }
}
