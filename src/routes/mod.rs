use axum::Router;

use crate::{error::AppError, state::SharedState};

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Liveness endpoint.
pub mod health;
/// Root greeting endpoint.
pub mod welcome;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    welcome::router()
        .merge(health::router())
        .merge(docs::router())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
