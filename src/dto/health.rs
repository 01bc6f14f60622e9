use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health response returned by the `/health` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok".
    pub status: String,
    /// Deployment environment taken from `APP_ENV`.
    #[schema(example = "development")]
    pub env: String,
    /// Network name of the machine serving the request.
    pub hostname: String,
    /// Application port taken from `APP_PORT`.
    #[schema(example = 8000)]
    pub app_port: i64,
}

impl HealthResponse {
    /// Create a health response indicating the service is operational.
    pub fn ok(env: String, hostname: String, app_port: i64) -> Self {
        Self {
            status: "ok".to_string(),
            env,
            hostname,
            app_port,
        }
    }
}
