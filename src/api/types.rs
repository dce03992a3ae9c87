//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::models::{Item, ToggleOutcome};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for toggling an item in a roster
#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleRequest {
    /// The item to add or remove, stored as given
    pub item: Item,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Catalog endpoint response data
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogData {
    /// Every selectable item
    pub items: Vec<Item>,
}

/// Roster endpoint response data
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterData {
    /// Whose roster this is
    pub user_id: String,
    /// Items in insertion order
    pub items: Vec<Item>,
    /// Number of items
    pub size: usize,
    /// Maximum number of items
    pub capacity: usize,
}

/// Toggle endpoint response data
#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleData {
    /// Whether the roster changed
    pub changed: bool,
    /// What the toggle did
    pub outcome: ToggleOutcome,
    /// Roster after the toggle
    pub roster: RosterData,
}
