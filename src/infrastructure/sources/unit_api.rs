use super::unit_mapping::{to_property, GetUnitsResponse};
use crate::domain::entities::property::Property;
use crate::domain::error::DomainError;
use crate::domain::ports::property_source::PropertySource;
use async_trait::async_trait;

const UNITS_PATH: &str = "/api/PropertyUnit/GetUnits";

/// Fetches the catalog from the property-unit REST backend.
pub struct UnitApiSource {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl UnitApiSource {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::builder()
                .user_agent("EstateLens/0.1")
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn units_url(&self) -> String {
        format!("{}{}", self.base_url, UNITS_PATH)
    }
}

#[async_trait]
impl PropertySource for UnitApiSource {
    async fn fetch(&self) -> Result<Vec<Property>, DomainError> {
        let url = self.units_url();
        tracing::debug!(%url, "fetching property units");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| DomainError::Source(format!("Property API request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Source(format!("Property API {status}: {body}")));
        }

        let payload: GetUnitsResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Unexpected property API payload: {e}")))?;
        if !payload.is_success {
            return Err(DomainError::Source(format!(
                "Property API reported failure ({}): {}",
                payload.status_code, payload.message
            )));
        }

        Ok(payload.data.iter().map(to_property).collect())
    }

    fn name(&self) -> &'static str {
        "unit-api"
    }
}
