//! Catalog client port
//!
//! Defines the interface for fetching the list of selectable items.

use super::super::models::Item;

/// Source of the item catalog
///
/// Implementations decide transport, caching and error behavior. Callers in
/// the core forward both the items and the error untouched.
///
/// Implementations live in the `adapters` module:
/// - **HTTP**: [`PokeApiClient`](crate::adapters::pokeapi::PokeApiClient)
/// - **File**: [`FileCatalog`](crate::adapters::file::FileCatalog)
/// - **Memory**: [`StaticCatalog`](crate::adapters::memory::StaticCatalog)
#[allow(async_fn_in_trait)]
pub trait CatalogClient {
    /// Error returned when the catalog cannot be fetched
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every item in the catalog
    async fn fetch_catalog(&self) -> Result<Vec<Item>, Self::Error>;
}
