//! Item model
//!
//! An item is one entry of the catalog a user picks roster members from.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item
pub type ItemId = u32;

/// An immutable catalog entry
///
/// Two items are "the same" for roster purposes when their `id` matches;
/// see [`Item::same_id`]. The derived `PartialEq` is full structural
/// equality and is only used for comparing values in tests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog identifier
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Sprite reference (URI or opaque string)
    pub sprite: String,

    /// Type tags, in catalog order
    pub types: Vec<String>,
}

impl Item {
    /// Create a new item
    #[must_use]
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        sprite: impl Into<String>,
        types: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sprite: sprite.into(),
            types,
        }
    }

    /// Whether `other` refers to the same catalog entry
    #[must_use]
    pub const fn same_id(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
