use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::types::dto::common::HealthResponse;

/// Health check API
///
/// Liveness only: answering at all means the process is up and serving.
/// Store reachability is not probed here; a broken store surfaces as 500s on
/// the sync hook itself, which is what the delivering platform reacts to.
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Identifies the mirror service and reports its status
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
