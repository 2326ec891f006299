use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use super::AppState;
use super::respond::{error_response, json_response};
use super::schemas::{ErrorResponse, GatheringRulesResponse};

/// Version tag carried by every rules payload.
pub const RULES_PAYLOAD_VERSION: &str = "1.0";

/// `GET /v1/gathering_rules` -- the versioned rules payload.
///
/// Returns every rule loaded at startup, unchanged. The rule set is
/// immutable for the process lifetime, so repeated calls return
/// byte-identical payloads.
#[utoipa::path(
    get,
    path = "/v1/gathering_rules",
    tag = "Rules",
    summary = "Conditional gathering rules",
    description = "Returns all gathering rule definitions as a versioned JSON payload.",
    responses(
        (status = 200, description = "The current rule set", body = GatheringRulesResponse),
        (status = 404, description = "No rules are loaded", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn gathering_rules(State(state): State<AppState>) -> Response {
    match state.service.rules() {
        Ok(set) => json_response(
            &GatheringRulesResponse {
                version: RULES_PAYLOAD_VERSION.to_owned(),
                rules: set.items().to_vec(),
            },
            StatusCode::OK,
        ),
        Err(err) => error_response(&err),
    }
}
