//! Configuration management
//!
//! Settings for the catalog source and the HTTP server, stored as TOML at
//! `~/.roster/config.toml` (see [`paths`](crate::paths)). A missing file
//! yields the defaults; a malformed one is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::CatalogSource;
use crate::paths;

/// Default PokeAPI base URL
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {}", path.display())]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`Config`]
    #[error("failed to parse config {}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    /// Config file could not be written
    #[error("failed to write config {}", path.display())]
    Write {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Catalog settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where the catalog comes from
    #[serde(default)]
    pub source: CatalogSource,
    /// PokeAPI base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of items to fetch from PokeAPI
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// JSON catalog file, used when `source = "file"`
    #[serde(default = "default_catalog_file")]
    pub file: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_limit() -> u32 {
    151
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from("catalog.json")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSource::default(),
            base_url: default_base_url(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            file: default_catalog_file(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` address to bind
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }
}
