use std::{io, num::ParseIntError};

use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::dto::common::ErrorBody;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A configuration value could not be converted to an integer.
    #[error("invalid integer value {value:?} for {var}")]
    ValueConversion {
        /// Name of the environment variable that was read.
        var: &'static str,
        /// Raw value as found in the environment.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The operating system could not report the host name.
    #[error("hostname unavailable")]
    Hostname(#[source] io::Error),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// No route matches the requested path.
    #[error("Not Found")]
    NotFound,
    /// The path exists but not for this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            detail: self.to_string(),
        });

        (status, payload).into_response()
    }
}
