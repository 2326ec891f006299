use super::schemas::{ErrorResponse, GatheringRulesResponse, HealthResponse};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Gathering Rules Service API",
        version = "0.1.0",
        description = "Read-only HTTP API serving conditional gathering rule definitions as a versioned JSON payload.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Rules", description = "Conditional gathering rules")
    ),
    paths(crate::api::health::health, crate::api::rules::gathering_rules),
    components(schemas(GatheringRulesResponse, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;
