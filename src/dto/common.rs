use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    pub detail: String,
}
