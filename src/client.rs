use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::BrowseError;
use crate::model::{Recipe, RecipePage};

/// Anything the pages can load recipes from.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch `limit` recipes starting at the zero-based offset `skip`.
    async fn list(&self, limit: u32, skip: u64) -> Result<RecipePage, BrowseError>;

    /// Fetch a single recipe by id.
    async fn get(&self, id: u32) -> Result<Recipe, BrowseError>;
}

/// HTTP client for the dummyjson recipe endpoints.
pub struct RecipeClient {
    client: Client,
    base_url: String,
}

impl RecipeClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, BrowseError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, BrowseError> {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, u64)],
    ) -> Result<T, BrowseError> {
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowseError::StatusError { status, url });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn list(&self, limit: u32, skip: u64) -> Result<RecipePage, BrowseError> {
        self.get_json(
            format!("{}/recipes", self.base_url),
            &[("limit", u64::from(limit)), ("skip", skip)],
        )
        .await
    }

    async fn get(&self, id: u32) -> Result<Recipe, BrowseError> {
        self.get_json(format!("{}/recipes/{}", self.base_url, id), &[])
            .await
    }
}
