use poem_openapi::Object;

/// Health check response
#[derive(Debug, Object)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Name of this service
    pub service: String,
    /// Running version
    pub version: String,
    /// Current server time (RFC 3339)
    pub timestamp: String,
}
