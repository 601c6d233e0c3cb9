use crate::domain::entities::property::{PredictionInterval, Property};
use crate::domain::error::DomainError;
use crate::domain::ports::property_repository::PropertyRepository;
use crate::domain::values::property_type::PropertyType;
use crate::domain::values::risk_level::RiskLevel;
use rusqlite::{params, Connection};
use std::sync::Mutex;

const SELECT_COLS: &str = "id, title, address, neighborhood, latitude, longitude, price, size, price_per_sqm, rooms, property_type, floor, features, predicted_roi, arbitrage_score, risk_indicator, prediction_lower, prediction_upper, cluster_id, cluster_label, images";

pub struct SqlitePropertyRepo {
    conn: Mutex<Connection>,
}

impl SqlitePropertyRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_property(row: &rusqlite::Row) -> Result<Property, rusqlite::Error> {
        let id: String = row.get(0)?;
        let type_str: String = row.get(10)?;
        let features_str: String = row.get(12)?;
        let risk_str: String = row.get(15)?;
        let lower: Option<f64> = row.get(16)?;
        let upper: Option<f64> = row.get(17)?;
        let images_str: String = row.get(20)?;

        Ok(Property {
            title: row.get(1)?,
            address: row.get(2)?,
            neighborhood: row.get(3)?,
            latitude: row.get(4)?,
            longitude: row.get(5)?,
            price: row.get(6)?,
            size: row.get(7)?,
            price_per_sqm: row.get(8)?,
            rooms: row.get(9)?,
            property_type: type_str.parse().unwrap_or_else(|_| {
                tracing::warn!(id = %id, value = %type_str, "invalid property_type, defaulting to apartment");
                PropertyType::Apartment
            }),
            floor: row.get(11)?,
            features: serde_json::from_str(&features_str).unwrap_or_default(),
            predicted_roi: row.get(13)?,
            arbitrage_score: row.get(14)?,
            risk_indicator: risk_str.parse().unwrap_or_else(|_| {
                tracing::warn!(id = %id, value = %risk_str, "invalid risk_indicator, defaulting to medium");
                RiskLevel::Medium
            }),
            prediction_interval: match (lower, upper) {
                (Some(lower), Some(upper)) => Some(PredictionInterval { lower, upper }),
                _ => None,
            },
            cluster_id: row.get(18)?,
            cluster_label: row.get(19)?,
            images: serde_json::from_str(&images_str).unwrap_or_default(),
            id,
        })
    }
}

impl PropertyRepository for SqlitePropertyRepo {
    fn list(&self) -> Result<Vec<Property>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM properties ORDER BY rowid ASC");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let properties = stmt
            .query_map([], Self::row_to_property)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(format!("Failed to read property: {e}")))?;
        Ok(properties)
    }

    fn get(&self, id: &str) -> Result<Option<Property>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM properties WHERE id = ?1");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_property)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        rows.next()
            .transpose()
            .map_err(|e| DomainError::Database(format!("Failed to read property: {e}")))
    }

    fn save(&self, property: &Property) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let now = chrono::Utc::now().to_rfc3339();
        let features = serde_json::to_string(&property.features)
            .map_err(|e| DomainError::Parse(e.to_string()))?;
        let images = serde_json::to_string(&property.images)
            .map_err(|e| DomainError::Parse(e.to_string()))?;
        conn.execute(
            "INSERT INTO properties (id, title, address, neighborhood, latitude, longitude, price, size, price_per_sqm, rooms, property_type, floor, features, predicted_roi, arbitrage_score, risk_indicator, prediction_lower, prediction_upper, cluster_id, cluster_label, images, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?22)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                address = excluded.address,
                neighborhood = excluded.neighborhood,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                price = excluded.price,
                size = excluded.size,
                price_per_sqm = excluded.price_per_sqm,
                rooms = excluded.rooms,
                property_type = excluded.property_type,
                floor = excluded.floor,
                features = excluded.features,
                predicted_roi = excluded.predicted_roi,
                arbitrage_score = excluded.arbitrage_score,
                risk_indicator = excluded.risk_indicator,
                prediction_lower = excluded.prediction_lower,
                prediction_upper = excluded.prediction_upper,
                cluster_id = excluded.cluster_id,
                cluster_label = excluded.cluster_label,
                images = excluded.images,
                updated_at = excluded.updated_at",
            params![
                property.id,
                property.title,
                property.address,
                property.neighborhood,
                property.latitude,
                property.longitude,
                property.price,
                property.size,
                property.price_per_sqm,
                property.rooms,
                property.property_type.to_string(),
                property.floor,
                features,
                property.predicted_roi,
                property.arbitrage_score,
                property.risk_indicator.to_string(),
                property.prediction_interval.map(|i| i.lower),
                property.prediction_interval.map(|i| i.upper),
                property.cluster_id,
                property.cluster_label,
                images,
                now,
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to save property: {e}")))?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM properties WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete property: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Property not found: {id}")));
        }
        Ok(())
    }

    fn count(&self) -> Result<usize, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(count as usize)
    }
}
