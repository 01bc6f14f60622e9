use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const BRAND: &str = "Xquantify";
const PRODUCT: &str = "MT5-CloudDesk";
const MESSAGE: &str = "Welcome! Your Dockerized FastAPI service is running.";

/// Static greeting served from `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    /// Company brand.
    #[schema(example = "Xquantify")]
    pub brand: String,
    /// Product name.
    #[schema(example = "MT5-CloudDesk")]
    pub product: String,
    /// Greeting text.
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            brand: BRAND.into(),
            product: PRODUCT.into(),
            message: MESSAGE.into(),
        }
    }
}
