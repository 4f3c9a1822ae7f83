//! # Recipe API Module
//!
//! This module defines the asynchronous [`RecipeSource`] seam the rest of the
//! application fetches recipe data through, the DTOs that cross it, and the
//! HTTP implementation backed by the recipe service.
//!
//! The wire format is small: `GET {base}/search?q={query}` answers
//! `{"recipes": [...]}` and `GET {base}/get?id={id}` answers
//! `{"recipe": {...}}`. Anything else (non-2xx status, undecodable body,
//! transport failure) maps onto [`FetchError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One search result row, enough to render a result-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Stable identifier used to fetch the full recipe later
    pub id: String,
    /// Title shown in the result list
    pub title: String,
    /// Publishing author
    pub author: String,
    /// Image location for the result thumbnail
    pub image_url: String,
}

/// Full payload of a single recipe as served by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    /// Recipe title
    pub title: String,
    /// Publishing author
    pub author: String,
    /// Image location
    pub image_url: String,
    /// Servings as published, when the source provides them
    #[serde(default)]
    pub servings: Option<u32>,
    /// Cooking time in minutes, when the source provides it
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    /// Raw ingredient lines, unparsed
    #[serde(rename = "ingredients")]
    pub ingredient_lines: Vec<String>,
}

/// Errors raised while talking to the recipe service
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Transport failures: connection, DNS, request build
    Request(String),
    /// Non-success HTTP status codes
    Status(u16),
    /// Bodies that do not decode into the expected shape
    Payload(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "Request error: {msg}"),
            FetchError::Status(code) => write!(f, "Status error: HTTP {code}"),
            FetchError::Payload(msg) => write!(f, "Payload error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Payload(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Asynchronous source of recipe summaries and full recipes
#[async_trait]
pub trait RecipeSource {
    /// Search recipes matching a free-text query, in service order
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError>;

    /// Fetch one recipe by its identifier
    async fn recipe(&self, id: &str) -> Result<RecipeData, FetchError>;
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
struct RecipeEnvelope {
    recipe: RecipeData,
}

/// [`RecipeSource`] implementation over the HTTP recipe service
pub struct HttpRecipeSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeSource {
    /// Create a source rooted at the given base URL (trailing slash tolerated)
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        let url = format!("{}/search", self.base_url);
        debug!(query = %query, "Requesting recipe search");

        let envelope: SearchEnvelope = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(query = %query, results = envelope.recipes.len(), "Search response decoded");
        Ok(envelope.recipes)
    }

    async fn recipe(&self, id: &str) -> Result<RecipeData, FetchError> {
        let url = format!("{}/get", self.base_url);
        debug!(recipe_id = %id, "Requesting recipe detail");

        let envelope: RecipeEnvelope = self
            .client
            .get(&url)
            .query(&[("id", id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.recipe)
    }
}
