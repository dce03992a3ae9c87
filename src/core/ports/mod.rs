//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (remote APIs, files).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod catalog_client;

pub use catalog_client::CatalogClient;
