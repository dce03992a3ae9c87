//! Errors raised by catalog adapters

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be built or the request did not complete
    #[error("request to {url} failed")]
    Http {
        /// Requested URL
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// A catalog file could not be read
    #[error("failed to read catalog file {}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A response or file did not contain the expected JSON
    #[error("invalid catalog data from {origin}")]
    Parse {
        /// URL or file path the data came from
        origin: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}
