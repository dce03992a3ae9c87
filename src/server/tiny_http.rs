//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.
//! Each request runs on its own scoped thread; catalog futures are driven
//! to completion on a tokio runtime handle.

use std::io::{Cursor, Read as _};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};
use tokio::runtime::Handle;

use crate::api::{self, ApiError, ApiResponse, ToggleRequest};
use crate::core::ports::CatalogClient;
use crate::core::services::RosterService;

/// Errors raised while starting the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound
    #[error("failed to bind {addr}")]
    Bind {
        /// Requested address
        addr: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Bind a server on `addr` (`host:port`, port 0 picks a free one)
pub fn bind(addr: &str) -> Result<Server, ServerError> {
    Server::http(addr).map_err(|source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Serve requests until the server is unblocked
///
/// Returns once every in-flight request has been answered.
pub fn serve<C: CatalogClient + Sync>(
    server: &Server,
    service: &RosterService<C>,
    runtime: &Handle,
) {
    std::thread::scope(|scope| {
        for mut request in server.incoming_requests() {
            scope.spawn(move || {
                let response = handle_api_request(&mut request, service, runtime);
                if let Err(e) = request.respond(response) {
                    log::warn!("failed to send response: {e}");
                }
            });
        }
    });
    log::info!("server stopped");
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_api_request<C: CatalogClient>(
    request: &mut Request,
    service: &RosterService<C>,
    runtime: &Handle,
) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    log::debug!("{method} {url}");

    let path = url.split_once('?').map_or(url.as_str(), |(path, _)| path);

    // Supports both /api/v1/... (versioned) and /api/... (unversioned)
    let Some(api_path) = path.strip_prefix("/api/v1").or_else(|| path.strip_prefix("/api")) else {
        return not_found_response(&format!("Not found: {method} {path}"));
    };

    if method == Method::Get && api_path == "/catalog" {
        return handle_result(runtime.block_on(api::get_catalog(service)));
    }

    let Some((user_id, resource)) =
        api_path.strip_prefix("/users/").and_then(|rest| rest.split_once('/'))
    else {
        return not_found_response(&format!("API endpoint not found: {method} {api_path}"));
    };
    let user_id = url_escape::decode(user_id);

    match resource {
        "roster" if method == Method::Get => handle_result(api::get_roster(service, &user_id)),
        "roster" if method == Method::Delete => handle_result(api::clear_roster(service, &user_id)),
        "roster/toggle" if method == Method::Post => match read_json_body::<ToggleRequest>(request) {
            Ok(req) => handle_result(api::toggle_item(service, &user_id, &req)),
            Err(e) => error_response(&e),
        },
        _ => not_found_response(&format!("API endpoint not found: {method} {api_path}")),
    }
}

fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSES
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_response(&response, error.status_code())
}

fn not_found_response(message: &str) -> Response<Cursor<Vec<u8>>> {
    error_response(&ApiError::not_found(message))
}

fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let mut response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    response
}
