use std::time::Duration;

use crate::normalize::DEFAULT_MAX_NUMBERED_FIELDS;

const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
const DEFAULT_USER_AGENT: &str = "mealdb-api-rs/0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`CatalogClient`](crate::CatalogClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Highest `strIngredientN` / `strMeasureN` index probed in detail records
    pub max_numbered_fields: usize,
}

impl ClientConfig {
    /// Default settings pointed at a different API root (test servers, mirrors)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_numbered_fields: DEFAULT_MAX_NUMBERED_FIELDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(config.max_numbered_fields, 20);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:8080/api/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.max_numbered_fields, 20);
    }
}
