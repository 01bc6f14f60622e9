use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::{common::ErrorBody, health::HealthResponse},
    error::AppError,
    services::health_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "APP_PORT is not an integer", body = ErrorBody)
    )
)]
/// Return the service status along with environment and host metadata.
pub async fn health(State(state): State<SharedState>) -> Result<Json<HealthResponse>, AppError> {
    let status = health_service::health_status(&state)?;
    Ok(Json(status))
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/health", get(health))
}
