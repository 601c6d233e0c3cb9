use crate::domain::entities::saved_search::SavedSearch;
use crate::domain::error::DomainError;
use crate::domain::ports::saved_search_repository::SavedSearchRepository;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

pub struct SqliteSavedSearchRepo {
    conn: Mutex<Connection>,
}

impl SqliteSavedSearchRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_search(row: &rusqlite::Row) -> Result<SavedSearch, rusqlite::Error> {
        let id: String = row.get(0)?;
        let spec_str: String = row.get(2)?;
        let created_str: String = row.get(3)?;
        let checked_str: Option<String> = row.get(4)?;
        let match_count: Option<i64> = row.get(5)?;

        let spec = serde_json::from_str(&spec_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(SavedSearch {
            spec,
            name: row.get(1)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            last_checked_at: checked_str.and_then(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
            }),
            last_match_count: match_count.map(|c| c.max(0) as usize),
            id,
        })
    }
}

impl SavedSearchRepository for SqliteSavedSearchRepo {
    fn add(&self, search: &SavedSearch) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let spec = serde_json::to_string(&search.spec)
            .map_err(|e| DomainError::Parse(e.to_string()))?;
        conn.execute(
            "INSERT INTO saved_searches (id, name, spec, created_at, last_checked_at, last_match_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                search.id,
                search.name,
                spec,
                search.created_at.to_rfc3339(),
                search.last_checked_at.map(|dt| dt.to_rfc3339()),
                search.last_match_count.map(|c| c as i64),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add saved search: {e}")))?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<SavedSearch>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, spec, created_at, last_checked_at, last_match_count FROM saved_searches ORDER BY created_at ASC, rowid ASC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let searches = stmt
            .query_map([], Self::row_to_search)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| match r {
                Ok(search) => Some(search),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable saved search");
                    None
                }
            })
            .collect();
        Ok(searches)
    }

    fn get(&self, id: &str) -> Result<Option<SavedSearch>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, spec, created_at, last_checked_at, last_match_count FROM saved_searches WHERE id = ?1",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_search)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        rows.next()
            .transpose()
            .map_err(|e| DomainError::Parse(format!("Unreadable saved search {id}: {e}")))
    }

    fn delete(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM saved_searches WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete saved search: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Saved search not found: {id}")));
        }
        Ok(())
    }

    fn record_check(&self, id: &str, match_count: usize, at: DateTime<Utc>) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute(
                "UPDATE saved_searches SET last_checked_at = ?1, last_match_count = ?2 WHERE id = ?3",
                params![at.to_rfc3339(), match_count as i64, id],
            )
            .map_err(|e| DomainError::Database(format!("Failed to record check: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Saved search not found: {id}")));
        }
        Ok(())
    }
}
