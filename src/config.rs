//! Runtime configuration from the environment.

pub const DEFAULT_DB_PATH: &str = "./estatelens.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    /// Base URL of the property-unit API, used by `import --api`.
    pub api_url: Option<String>,
    pub api_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            api_url: None,
            api_token: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            db_path: get("ESTATELENS_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            api_url: get("ESTATELENS_API_URL"),
            api_token: get("ESTATELENS_API_TOKEN"),
        }
    }
}
