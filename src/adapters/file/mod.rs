//! File-based catalog
//!
//! Reads the catalog from a JSON array of items. The file is read on every
//! fetch so edits show up without a restart.

use std::path::PathBuf;

use crate::core::models::Item;
use crate::core::ports::CatalogClient;

use super::CatalogError;

/// A catalog stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    /// Create a catalog reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogClient for FileCatalog {
    type Error = CatalogError;

    async fn fetch_catalog(&self) -> Result<Vec<Item>, Self::Error> {
        log::debug!("reading catalog from {}", self.path.display());
        let content = tokio::fs::read(&self.path).await.map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_slice(&content).map_err(|source| CatalogError::Parse {
            origin: self.path.display().to_string(),
            source,
        })
    }
}
