//! MealDB HTTP client

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{CatalogError, Result};
use crate::types::{complete_entries, DetailRecord, MealsResponse, RawDetailEntry, RawMealEntry};
use crate::SummaryRecord;

/// Client for the MealDB list and lookup endpoints
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent requests behind an `Arc`.
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CatalogClient {
    /// Create a client against the public MealDB API
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom settings
    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List endpoint URL for a category, e.g. `Dessert`
    pub fn category_url(&self, category: &str) -> String {
        format!(
            "{}/filter.php?c={}",
            self.config.base_url,
            urlencoding::encode(category)
        )
    }

    /// Lookup endpoint URL for a single meal id
    pub fn detail_url(&self, id: &str) -> String {
        format!(
            "{}/lookup.php?i={}",
            self.config.base_url,
            urlencoding::encode(id)
        )
    }

    /// Fetch a summary list from a list endpoint URL
    ///
    /// Incomplete entries are dropped; the rest keep server order. Any
    /// network, status or decode failure fails the whole call.
    pub async fn fetch_list(&self, url: &str) -> Result<Vec<SummaryRecord>> {
        debug!(url = %url, "Fetching meal list");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Meal list request failed");
            return Err(CatalogError::Status(status));
        }

        let body = response.bytes().await?;
        let data: MealsResponse<RawMealEntry> = serde_json::from_slice(&body)?;
        let entries = data.into_entries();
        let received = entries.len();

        let records = complete_entries(entries);
        if records.len() < received {
            debug!(
                url = %url,
                dropped = received - records.len(),
                "Dropped incomplete meal entries"
            );
        }

        Ok(records)
    }

    /// Fetch the summary list for a category
    pub async fn fetch_category(&self, category: &str) -> Result<Vec<SummaryRecord>> {
        let url = self.category_url(category);
        self.fetch_list(&url).await
    }

    /// Fetch the detail record for a meal id
    ///
    /// Detail lookups are advisory: every failure resolves to `None` and is
    /// only logged.
    pub async fn fetch_detail(&self, id: &str) -> Option<DetailRecord> {
        let url = self.detail_url(id);

        let response = match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!(id, status = %response.status(), "Meal detail request failed");
                return None;
            }
            Err(e) => {
                warn!(id, error = %e, "Meal detail request failed");
                return None;
            }
        };

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(id, error = %e, "Failed to read meal detail body");
                return None;
            }
        };

        let data: MealsResponse<RawDetailEntry> = match serde_json::from_slice(&body) {
            Ok(data) => data,
            Err(e) => {
                warn!(id, error = %e, "Failed to parse meal detail response");
                return None;
            }
        };

        let Some(first) = data.into_entries().into_iter().next() else {
            debug!(id, "Meal not found");
            return None;
        };

        let detail = DetailRecord::from_fields(&first, self.config.max_numbered_fields);
        if detail.is_none() {
            debug!(id, "Meal detail failed completeness check");
        }
        detail
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
