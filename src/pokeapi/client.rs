//! PokeAPI Catalog Client
//!
//! HTTP client for fetching the full pokemon name catalog from the
//! PokeAPI list endpoint. One operation, no logic beyond the fetch.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::types::PokemonListResponse;
use crate::models::Pokemon;

pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";
const CATALOG_LIMIT: usize = 5000;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upstream catalog fetch failures.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request to catalog provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode catalog payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Seam between the query service and the upstream catalog source.
/// Tests substitute a scripted provider behind this trait.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full, unfiltered catalog. Called at most once per
    /// cache miss.
    async fn fetch_all(&self) -> Result<Vec<Pokemon>, ProviderError>;
}

pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(POKEAPI_BASE).expect("Failed to create default PokeAPI client")
    }
}

#[async_trait]
impl CatalogProvider for PokeApiClient {
    async fn fetch_all(&self) -> Result<Vec<Pokemon>, ProviderError> {
        let url = format!("{}/pokemon?limit={}", self.base_url, CATALOG_LIMIT);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let text = response.text().await?;
        let parsed: PokemonListResponse =
            serde_json::from_str(&text).map_err(ProviderError::Decode)?;

        tracing::debug!(count = parsed.results.len(), "fetched catalog from PokeAPI");
        Ok(parsed.results)
    }
}
