//! HTTP client for the PokeAPI catalog

use std::time::Duration;

use futures::{StreamExt as _, TryStreamExt as _, stream};
use serde::de::DeserializeOwned;

use crate::adapters::CatalogError;
use crate::config::CatalogConfig;
use crate::core::models::Item;
use crate::core::ports::CatalogClient;

use super::types::{PokemonDetail, PokemonList};

/// Detail requests a single fetch keeps in flight
pub const MAX_CONCURRENT_REQUESTS: usize = 8;

/// Catalog client backed by a PokeAPI-compatible HTTP service
///
/// A fetch lists the first `limit` pokemon, then requests the detail
/// resources concurrently, at most [`MAX_CONCURRENT_REQUESTS`] at a time.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    limit: u32,
}

impl PokeApiClient {
    /// Create a client from catalog configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(&config.base_url, config.limit, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client for `base_url` (e.g. `https://pokeapi.co/api/v2`)
    pub fn new(base_url: &str, limit: u32, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| CatalogError::Http {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            base_url,
            limit,
        })
    }

    /// Base URL requests are made against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let http_err = |source| CatalogError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_err)?;
        serde_json::from_slice(&body).map_err(|source| CatalogError::Parse {
            origin: url.to_string(),
            source,
        })
    }
}

impl CatalogClient for PokeApiClient {
    type Error = CatalogError;

    async fn fetch_catalog(&self) -> Result<Vec<Item>, Self::Error> {
        let list_url = format!("{}/pokemon?limit={}&offset=0", self.base_url, self.limit);
        log::info!("fetching catalog from {list_url}");

        let list: PokemonList = self.get_json(&list_url).await?;
        let details: Vec<PokemonDetail> = stream::iter(&list.results)
            .map(|entry| self.get_json(&entry.url))
            .buffered(MAX_CONCURRENT_REQUESTS)
            .try_collect()
            .await?;

        log::info!("fetched {} catalog items", details.len());
        Ok(details.into_iter().map(Item::from).collect())
    }
}
