use crate::api::wire::{FilterResponse, LookupResponse};
use crate::api::MealDatabase;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::{MealDetail, MealSummary};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for TheMealDB JSON API.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("recipe-ideas/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against an explicit base URL (used by tests to
    /// point at a mock server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// List the meals using the given ingredient via `filter.php`.
    pub async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, ApiError> {
        let url = format!("{}/filter.php", self.base_url);
        debug!("GET {} i={:?}", url, ingredient);

        let response = self
            .client
            .get(&url)
            .query(&[("i", ingredient)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        let envelope: FilterResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))?;

        // null means "no matches", not a protocol violation
        let meals = envelope.meals.unwrap_or_default();
        debug!("filter.php returned {} meals", meals.len());
        Ok(meals.into_iter().map(MealSummary::from).collect())
    }

    /// Fetch the full record of one meal via `lookup.php`.
    pub async fn lookup(&self, id: &str) -> Result<MealDetail, ApiError> {
        let url = format!("{}/lookup.php", self.base_url);
        debug!("GET {} i={:?}", url, id);

        let response = self.client.get(&url).query(&[("i", id)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        let envelope: LookupResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))?;

        let wire = envelope
            .meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or_else(|| ApiError::MealNotFound(id.to_string()))?;

        Ok(wire.into())
    }
}

#[async_trait]
impl MealDatabase for MealDbClient {
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, ApiError> {
        MealDbClient::filter_by_ingredient(self, ingredient).await
    }

    async fn lookup(&self, id: &str) -> Result<MealDetail, ApiError> {
        MealDbClient::lookup(self, id).await
    }
}
