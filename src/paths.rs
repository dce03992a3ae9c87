//! Centralized path definitions for roster
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.roster/
//! └── config.toml               # Catalog source, server address
//! ```
//!
//! Rosters themselves are never written to disk.

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "ROSTER_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".roster";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global roster directory.
///
/// Returns `~/.roster/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Returns `$ROSTER_CONFIG` when set and non-empty, otherwise
/// `~/.roster/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
