//! Domain models for roster
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Item`] - A catalog entry, identified by its integer id
//! - [`Roster`] - The items one user has picked, at most [`MAX_ROSTER_SIZE`]
//! - [`ToggleOutcome`] - What a toggle did to a roster

mod item;
mod roster;

pub use item::{Item, ItemId};
pub use roster::{MAX_ROSTER_SIZE, Roster, ToggleOutcome};
