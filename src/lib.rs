//! roster - Per-user bounded team rosters over a remote item catalog
//!
//! This library tracks, for each user, an ordered roster of at most six
//! catalog items with toggle semantics, and exposes it through an
//! HTTP-agnostic API layer and a small `tiny_http` server.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod server;
