//! Application error type and its HTTP representation.
//!
//! Every error leaves the service as a flat JSON body:
//!
//! ```json
//! { "error": "short not found on database" }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// Message returned when a short code has no mapping.
pub const NOT_FOUND_MESSAGE: &str = "short not found on database";

/// Message returned whenever the key-value store fails.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "cannot connect to DB";

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input (bad URL, bad custom code, out-of-range expiry).
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// A caller-chosen short code is already taken.
    #[error("{0}")]
    Conflict(String),

    /// The key-value store could not be reached or rejected a command.
    #[error("cannot connect to DB")]
    StoreUnavailable(#[source] StoreError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::StoreUnavailable(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(format!("Invalid request: {}", e))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::StoreUnavailable(source) => {
                tracing::error!(error = %source, "Store request failed");
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
