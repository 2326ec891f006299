use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Versioned gathering rules payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GatheringRulesResponse {
    /// Payload schema version.
    #[schema(example = "1.0")]
    pub version: String,
    /// The loaded rule definitions, passed through unchanged.
    pub rules: Vec<serde_json::Value>,
}

/// Error payload returned for failed requests.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    #[schema(example = "internal error")]
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status indicator.
    #[schema(example = "ok")]
    pub status: String,
    /// Number of rules loaded at startup.
    #[schema(example = 12)]
    pub rules_loaded: usize,
    /// When the rule load completed.
    pub loaded_at: Option<DateTime<Utc>>,
}
