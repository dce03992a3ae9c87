//! PokeAPI catalog adapter
//!
//! Implements `CatalogClient` over the public PokeAPI REST service.

mod client;
mod types;

pub use client::{MAX_CONCURRENT_REQUESTS, PokeApiClient};
pub use types::{NamedResource, PokemonDetail, PokemonList, Sprites, TypeSlot};
