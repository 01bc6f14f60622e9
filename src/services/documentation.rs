use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the CloudDesk service.
#[openapi(
    info(title = "Xquantify-MT5-CloudDesk", version = "1.0.0"),
    paths(
        crate::routes::welcome::welcome,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::dto::welcome::WelcomeResponse,
            crate::dto::health::HealthResponse,
            crate::dto::common::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "welcome", description = "Service greeting"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_routes() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Xquantify-MT5-CloudDesk");
        assert_eq!(doc.info.version, "1.0.0");
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
