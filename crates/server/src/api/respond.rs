use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use gathering_rules::{ErrorCode, ServiceError};

use super::schemas::ErrorResponse;

/// Serialize `value` as a JSON response with the given status.
///
/// A serialization failure downgrades to a bare 500 with no body;
/// nothing is allowed to panic past the handler boundary.
pub fn json_response<T: Serialize>(value: &T, status: StatusCode) -> Response {
    let body = match serde_json::to_vec(value) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "failed to serialize response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
    {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "failed to build response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Map a typed service error onto its HTTP response.
///
/// `NotFound` and `InvalidArgument` messages pass through to the
/// client. `Unknown` causes are logged server-side and replaced with a
/// generic message so internal detail never reaches the wire.
pub fn error_response(err: &ServiceError) -> Response {
    let (status, message) = match err.code() {
        ErrorCode::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
        ErrorCode::InvalidArgument => (StatusCode::BAD_REQUEST, err.to_string()),
        ErrorCode::Unknown => {
            if let Some(cause) = std::error::Error::source(err) {
                error!(error = %err, %cause, "gathering rules request failed");
            } else {
                error!(error = %err, "gathering rules request failed");
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_owned(),
            )
        }
    };

    json_response(&ErrorResponse { error: message }, status)
}
