//! Business logic services
//!
//! - [`roster_service`] - Per-user roster store and catalog delegation

pub mod roster_service;

pub use roster_service::RosterService;
