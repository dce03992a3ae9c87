//! Roster service - owns every user's roster
//!
//! The service holds the per-user roster store and the catalog client it
//! delegates catalog reads to. All roster operations go through a single
//! lock, so callers never observe a half-applied toggle.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::models::{Item, Roster, ToggleOutcome};
use crate::core::ports::CatalogClient;

/// Per-user roster store plus catalog access
#[derive(Debug)]
pub struct RosterService<C> {
    client: C,
    rosters: Mutex<HashMap<String, Roster>>,
}

impl<C: CatalogClient> RosterService<C> {
    /// Create a service with an empty store
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            rosters: Mutex::new(HashMap::new()),
        }
    }

    /// The catalog client this service delegates to
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Fetch the catalog
    ///
    /// Calls the client exactly once and returns its result as-is.
    pub async fn get_catalog(&self) -> Result<Vec<Item>, C::Error> {
        log::debug!("fetching catalog");
        self.client.fetch_catalog().await
    }

    /// Current roster for `user_id`, in insertion order
    ///
    /// Unknown users get an empty roster; no store entry is created.
    #[must_use]
    pub fn get_roster(&self, user_id: &str) -> Vec<Item> {
        self.store()
            .get(user_id)
            .map(|roster| roster.items().to_vec())
            .unwrap_or_default()
    }

    /// Number of items in the roster for `user_id`
    #[must_use]
    pub fn roster_size(&self, user_id: &str) -> usize {
        self.store().get(user_id).map_or(0, Roster::len)
    }

    /// Empty the roster for `user_id`
    pub fn clear_roster(&self, user_id: &str) {
        log::debug!("clearing roster for {user_id}");
        self.store().insert(user_id.to_string(), Roster::new());
    }

    /// Add `item` to the roster if absent, remove it if present
    ///
    /// Returns `true` when the roster changed. A full roster declines new
    /// items and returns `false`.
    pub fn toggle_item(&self, user_id: &str, item: Item) -> bool {
        self.toggle(user_id, item).changed()
    }

    /// Like [`toggle_item`](Self::toggle_item), reporting what happened
    pub fn toggle(&self, user_id: &str, item: Item) -> ToggleOutcome {
        let item_id = item.id;
        let mut store = self.store();

        let outcome = match store.get_mut(user_id) {
            Some(roster) => roster.toggle(item),
            None => {
                let mut roster = Roster::new();
                let outcome = roster.toggle(item);
                store.insert(user_id.to_string(), roster);
                outcome
            },
        };

        log::debug!("toggle item {item_id} for {user_id}: {outcome}");
        outcome
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // still guards valid data.
    fn store(&self) -> MutexGuard<'_, HashMap<String, Roster>> {
        self.rosters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
