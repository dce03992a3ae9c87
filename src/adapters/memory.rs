//! In-memory catalog

use std::convert::Infallible;

use crate::core::models::Item;
use crate::core::ports::CatalogClient;

/// A catalog backed by a fixed list of items
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<Item>,
}

impl StaticCatalog {
    /// Create a catalog serving `items`
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl CatalogClient for StaticCatalog {
    type Error = Infallible;

    async fn fetch_catalog(&self) -> Result<Vec<Item>, Self::Error> {
        Ok(self.items.clone())
    }
}
