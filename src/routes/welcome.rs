use axum::{Json, Router, routing::get};

use crate::{dto::welcome::WelcomeResponse, state::SharedState};

#[utoipa::path(
    get,
    path = "/",
    tag = "welcome",
    responses((status = 200, description = "Static greeting", body = WelcomeResponse))
)]
/// Return the fixed welcome message.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

/// Configure the root route.
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(welcome))
}
