//! Responses outside the issue API surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Fallback for any request that matches no route.
///
/// Plain text, matching the persisted API contract.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
