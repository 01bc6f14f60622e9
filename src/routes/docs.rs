use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

/// Path of the interactive documentation UI.
pub const DOCS_PATH: &str = "/docs";
/// Path of the ReDoc reference page.
pub const REDOC_PATH: &str = "/redoc";
/// Path of the raw OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Serve Swagger UI at [`DOCS_PATH`], ReDoc at [`REDOC_PATH`], and the document
/// both render at [`OPENAPI_PATH`].
pub fn router() -> Router<SharedState> {
    let swagger: Router<SharedState> = SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_PATH, ApiDoc::openapi())
        .into();

    swagger.merge(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()))
}
