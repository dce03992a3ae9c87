//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::core::models::MAX_ROSTER_SIZE;
use crate::core::ports::CatalogClient;
use crate::core::services::RosterService;

use super::error::ApiError;
use super::types::{CatalogData, RosterData, ToggleData, ToggleRequest};

// =============================================================================
// CATALOG
// =============================================================================

/// Fetch the full catalog
pub async fn get_catalog<C: CatalogClient>(
    service: &RosterService<C>,
) -> Result<CatalogData, ApiError> {
    let items = service.get_catalog().await.map_err(|e| {
        log::warn!("catalog fetch failed: {e}");
        ApiError::bad_gateway(error_chain(&e))
    })?;

    Ok(CatalogData { items })
}

// =============================================================================
// ROSTERS
// =============================================================================

/// Get a user's roster
pub fn get_roster<C: CatalogClient>(
    service: &RosterService<C>,
    user_id: &str,
) -> Result<RosterData, ApiError> {
    let user_id = validate_user_id(user_id)?;
    Ok(roster_data(service, user_id))
}

/// Add or remove an item in a user's roster
pub fn toggle_item<C: CatalogClient>(
    service: &RosterService<C>,
    user_id: &str,
    req: &ToggleRequest,
) -> Result<ToggleData, ApiError> {
    let user_id = validate_user_id(user_id)?;
    let outcome = service.toggle(user_id, req.item.clone());

    Ok(ToggleData {
        changed: outcome.changed(),
        outcome,
        roster: roster_data(service, user_id),
    })
}

/// Empty a user's roster
pub fn clear_roster<C: CatalogClient>(
    service: &RosterService<C>,
    user_id: &str,
) -> Result<RosterData, ApiError> {
    let user_id = validate_user_id(user_id)?;
    service.clear_roster(user_id);
    Ok(roster_data(service, user_id))
}

// =============================================================================
// HELPERS
// =============================================================================

// Ids are keys as sent; only all-blank ids are rejected.
fn validate_user_id(user_id: &str) -> Result<&str, ApiError> {
    if user_id.trim().is_empty() {
        return Err(ApiError::bad_request("User id cannot be empty"));
    }
    Ok(user_id)
}

fn roster_data<C: CatalogClient>(service: &RosterService<C>, user_id: &str) -> RosterData {
    let items = service.get_roster(user_id);
    RosterData {
        user_id: user_id.to_string(),
        size: items.len(),
        items,
        capacity: MAX_ROSTER_SIZE,
    }
}

/// Render an error and its sources as `outer: inner: ...`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
