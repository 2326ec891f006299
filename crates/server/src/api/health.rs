use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use super::AppState;
use super::respond::json_response;
use super::schemas::HealthResponse;

/// `GET /health` -- liveness probe with rule load information.
///
/// Reports `ok` as long as the process is serving; whether the rules
/// payload itself is available is the rules route's concern.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Health check",
    description = "Returns service status and the size of the loaded rule set.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Response {
    let (rules_loaded, loaded_at) = match state.service.rules() {
        Ok(set) => (set.len(), Some(set.loaded_at())),
        Err(_) => (0, None),
    };

    json_response(
        &HealthResponse {
            status: "ok".into(),
            rules_loaded,
            loaded_at,
        },
        StatusCode::OK,
    )
}
