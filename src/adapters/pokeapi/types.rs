//! PokeAPI response shapes
//!
//! Only the fields the catalog needs are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

use crate::core::models::Item;

/// `GET /pokemon?limit=N` response
#[derive(Debug, Deserialize)]
pub struct PokemonList {
    /// One entry per pokemon, pointing at its detail resource
    pub results: Vec<NamedResource>,
}

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Absolute URL of the resource
    pub url: String,
}

/// `GET /pokemon/{id}` response
#[derive(Debug, Deserialize)]
pub struct PokemonDetail {
    /// Pokedex number
    pub id: u32,
    /// Lowercase name
    pub name: String,
    /// Sprite URLs
    pub sprites: Sprites,
    /// Type slots (1 = primary)
    pub types: Vec<TypeSlot>,
}

/// Sprite URLs of a pokemon
#[derive(Debug, Deserialize)]
pub struct Sprites {
    /// Default front sprite; missing for some forms
    pub front_default: Option<String>,
}

/// One entry of a pokemon's type list
#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    /// Position of the type (1-based)
    pub slot: u8,
    /// The type itself
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl From<PokemonDetail> for Item {
    fn from(mut detail: PokemonDetail) -> Self {
        detail.types.sort_by_key(|t| t.slot);
        Self::new(
            detail.id,
            detail.name,
            detail.sprites.front_default.unwrap_or_default(),
            detail.types.into_iter().map(|t| t.kind.name).collect(),
        )
    }
}
