//! Tests for API module
//!
//! Tests error types, request/response types, and handler functions.

use roster::api::{self, ApiResponse, ToggleRequest};
use roster::core::models::{MAX_ROSTER_SIZE, ToggleOutcome};
use roster::core::services::RosterService;

use crate::common::{MockCatalog, full_team, item, small_catalog};

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use roster::api::ApiError;

    #[test]
    fn test_error_code_bad_gateway() {
        let err = ApiError::bad_gateway("catalog down");
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.message, "catalog down");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::not_found("Resource missing");
        let display = format!("{err}");
        assert!(display.contains("NOT_FOUND"));
        assert!(display.contains("Resource missing"));
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

mod response_tests {
    use roster::api::ApiResponse;

    #[test]
    fn test_api_response_error() {
        let resp: ApiResponse<()> = ApiResponse::error("NOT_FOUND", "Roster not found");
        assert!(!resp.success);
        assert!(resp.data.is_none());
        let err = resp.error.unwrap();
        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(err.message, "Roster not found");
    }

    #[test]
    fn test_api_response_serializes() {
        let resp: ApiResponse<String> = ApiResponse::success("test".to_string());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":\"test\""));
        assert!(!json.contains("\"error\""));
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[test]
fn test_toggle_request_deserialize() {
    let json = r#"{"item": {"id": 5, "name": "Jayce", "sprite": "test", "types": ["test"]}}"#;
    let req: ToggleRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.item, item(5, "Jayce"));
}

#[test]
fn test_toggle_request_requires_item_fields() {
    let json = r#"{"item": {"id": 5, "name": "Jayce"}}"#;
    assert!(serde_json::from_str::<ToggleRequest>(json).is_err());
}

// =============================================================================
// HANDLERS
// =============================================================================

fn service() -> RosterService<MockCatalog> {
    RosterService::new(MockCatalog::with_items(small_catalog()))
}

#[tokio::test]
async fn test_get_catalog_handler() {
    let service = service();
    let data = api::get_catalog(&service).await.unwrap();
    assert_eq!(data.items, small_catalog());
    assert_eq!(service.client().calls(), 1);
}

#[tokio::test]
async fn test_get_catalog_handler_maps_failure_to_502() {
    let service = RosterService::new(MockCatalog::failing(503));
    let err = api::get_catalog(&service).await.unwrap_err();
    assert_eq!(err.status_code(), 502);
    assert!(err.message.contains("503"));
}

#[test]
fn test_get_roster_handler_empty() {
    let data = api::get_roster(&service(), "user1").unwrap();
    assert_eq!(data.user_id, "user1");
    assert!(data.items.is_empty());
    assert_eq!(data.size, 0);
    assert_eq!(data.capacity, MAX_ROSTER_SIZE);
}

#[test]
fn test_toggle_handler_full_roster() {
    let service = service();
    for it in full_team() {
        service.toggle_item("user1", it);
    }

    let req = ToggleRequest {
        item: item(7, "BurkCaitlyn"),
    };
    let data = api::toggle_item(&service, "user1", &req).unwrap();
    assert!(!data.changed);
    assert_eq!(data.outcome, ToggleOutcome::RosterFull);
    assert_eq!(data.roster.items, full_team());
}

#[test]
fn test_clear_handler() {
    let service = service();
    service.toggle_item("user1", item(1, "Kohaku"));

    let data = api::clear_roster(&service, "user1").unwrap();
    assert!(data.items.is_empty());
    assert!(service.get_roster("user1").is_empty());
}

#[test]
fn test_handlers_reject_blank_user() {
    let service = service();
    let req = ToggleRequest {
        item: item(1, "Kohaku"),
    };
    assert_eq!(api::toggle_item(&service, "", &req).unwrap_err().status_code(), 400);
    assert_eq!(api::clear_roster(&service, " ").unwrap_err().status_code(), 400);
}

#[test]
fn test_toggle_data_serializes_outcome() {
    let service = service();
    let req = ToggleRequest {
        item: item(5, "Jayce"),
    };
    let data = api::toggle_item(&service, "user1", &req).unwrap();
    let json = serde_json::to_string(&ApiResponse::success(data)).unwrap();
    assert!(json.contains("\"outcome\":\"added\""));
    assert!(json.contains("\"changed\":true"));
}
