use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::filter_spec::FilterSpecification;

/// A named filter specification the user wants to be alerted about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub spec: FilterSpecification,
    pub created_at: DateTime<Utc>,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub last_match_count: Option<usize>,
}

impl SavedSearch {
    pub fn new(name: String, spec: FilterSpecification) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            spec,
            created_at: Utc::now(),
            last_checked_at: None,
            last_match_count: None,
        }
    }

    /// Matches gained since the previous check; `None` on the first check.
    pub fn new_matches(&self, current: usize) -> Option<usize> {
        self.last_match_count
            .map(|previous| current.saturating_sub(previous))
    }
}
