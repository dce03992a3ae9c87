//! Common test utilities shared across unit tests
//!
//! - fixtures: item builders matching the catalog shape
//! - mocks: `CatalogClient` implementations with configurable behavior

use std::sync::atomic::{AtomicUsize, Ordering};

use roster::core::models::Item;
use roster::core::ports::CatalogClient;
use thiserror::Error;

// =============================================================================
// FIXTURES
// =============================================================================

/// Build an item with placeholder sprite and type
pub fn item(id: u32, name: &str) -> Item {
    Item::new(id, name, "test", vec!["test".to_string()])
}

/// Six distinct items, ids 1..=6
pub fn full_team() -> Vec<Item> {
    vec![
        item(1, "Kohaku"),
        item(2, "Kiki"),
        item(3, "LaPetiteDinde"),
        item(4, "Vi"),
        item(5, "Jinx"),
        item(6, "Victor"),
    ]
}

/// Three items used as a small catalog
pub fn small_catalog() -> Vec<Item> {
    vec![item(1, "Kohaku"), item(2, "Kiki"), item(3, "LaPetiteDinde")]
}

// =============================================================================
// MOCKS
// =============================================================================

/// Error returned by [`MockCatalog`] when configured to fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("upstream unavailable (status {status})")]
pub struct MockCatalogError {
    pub status: u16,
}

/// Catalog client that counts calls and returns a canned result
pub struct MockCatalog {
    result: Result<Vec<Item>, MockCatalogError>,
    calls: AtomicUsize,
}

impl MockCatalog {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            result: Ok(items),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(MockCatalogError { status }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogClient for MockCatalog {
    type Error = MockCatalogError;

    async fn fetch_catalog(&self) -> Result<Vec<Item>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
