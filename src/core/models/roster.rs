//! Roster model
//!
//! A roster is the bounded, ordered set of items a single user has picked.
//! Membership is decided by item id, and the roster never grows past
//! [`MAX_ROSTER_SIZE`].

use serde::{Deserialize, Serialize};

use super::{Item, ItemId};

/// Maximum number of items a roster can hold
pub const MAX_ROSTER_SIZE: usize = 6;

/// What a toggle did to a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The item was absent and has been appended
    Added,
    /// The item was present and has been removed
    Removed,
    /// The item was absent but the roster is full; nothing changed
    RosterFull,
}

impl ToggleOutcome {
    /// Whether the roster contents changed
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }
}

impl std::fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
            Self::RosterFull => write!(f, "roster_full"),
        }
    }
}

/// An ordered, id-unique collection of at most [`MAX_ROSTER_SIZE`] items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    items: Vec<Item>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the roster has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the roster is at capacity
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_ROSTER_SIZE
    }

    /// Whether an item with `id` is in the roster
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Add `item` if absent, remove it if present
    ///
    /// Presence is checked by id only. When the item is absent and the
    /// roster is full the roster is left untouched.
    pub fn toggle(&mut self, item: Item) -> ToggleOutcome {
        if let Some(pos) = self.items.iter().position(|i| i.same_id(&item)) {
            self.items.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            return ToggleOutcome::RosterFull;
        }

        self.items.push(item);
        ToggleOutcome::Added
    }
}
