use rusqlite::Connection;

use crate::domain::error::DomainError;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS properties (
            id TEXT PRIMARY KEY,
            title TEXT,
            address TEXT NOT NULL,
            neighborhood TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            price REAL NOT NULL,
            size REAL NOT NULL,
            price_per_sqm REAL NOT NULL,
            rooms INTEGER NOT NULL,
            property_type TEXT NOT NULL,
            floor INTEGER,
            features TEXT NOT NULL DEFAULT '{}',
            predicted_roi REAL NOT NULL,
            arbitrage_score REAL NOT NULL,
            risk_indicator TEXT NOT NULL,
            prediction_lower REAL,
            prediction_upper REAL,
            cluster_id TEXT,
            cluster_label TEXT,
            images TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS saved_searches (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            spec TEXT NOT NULL,
            created_at TEXT NOT NULL,
            last_checked_at TEXT,
            last_match_count INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_properties_neighborhood ON properties(neighborhood);
        CREATE INDEX IF NOT EXISTS idx_properties_cluster ON properties(cluster_id);
        CREATE INDEX IF NOT EXISTS idx_saved_searches_created ON saved_searches(created_at);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
