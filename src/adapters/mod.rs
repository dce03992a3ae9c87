//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `pokeapi/` - HTTP catalog from a PokeAPI-compatible service
//! - `file/` - JSON file catalog
//! - `memory` - Fixed in-memory catalog
//!
//! [`AnyCatalog`] picks one of the I/O-backed catalogs at runtime from
//! configuration.

mod error;
pub mod file;
pub mod memory;
pub mod pokeapi;

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::core::models::Item;
use crate::core::ports::CatalogClient;

pub use error::CatalogError;

/// Where the catalog comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Remote PokeAPI service (default)
    #[default]
    PokeApi,
    /// Local JSON file
    File,
}

impl std::str::FromStr for CatalogSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pokeapi" | "http" => Ok(Self::PokeApi),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown catalog source: {s}. Use 'pokeapi' or 'file'")),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PokeApi => write!(f, "pokeapi"),
            Self::File => write!(f, "file"),
        }
    }
}

/// A catalog client chosen at runtime
#[derive(Debug, Clone)]
pub enum AnyCatalog {
    /// PokeAPI over HTTP
    PokeApi(pokeapi::PokeApiClient),
    /// JSON file on disk
    File(file::FileCatalog),
}

impl AnyCatalog {
    /// Build the client selected by `config.source`
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match config.source {
            CatalogSource::PokeApi => pokeapi::PokeApiClient::from_config(config).map(Self::PokeApi),
            CatalogSource::File => Ok(Self::File(file::FileCatalog::new(&config.file))),
        }
    }

    /// Which source this client reads from
    #[must_use]
    pub const fn source(&self) -> CatalogSource {
        match self {
            Self::PokeApi(_) => CatalogSource::PokeApi,
            Self::File(_) => CatalogSource::File,
        }
    }
}

impl CatalogClient for AnyCatalog {
    type Error = CatalogError;

    async fn fetch_catalog(&self) -> Result<Vec<Item>, Self::Error> {
        match self {
            Self::PokeApi(client) => client.fetch_catalog().await,
            Self::File(client) => client.fetch_catalog().await,
        }
    }
}
