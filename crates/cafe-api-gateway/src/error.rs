//! Errors for the read routes.
//!
//! `/random`, `/all` and `/search` have no fixed envelope, so their failures
//! go out as `{"error": {"code": ..., "message": ...}}` with status 500.
//! Mutating routes answer with an [`Envelope`] instead.
//!
//! [`Envelope`]: crate::envelope::Envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use cafe_api_control::ControlError;

/// Read-route failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A random pick was requested but no cafes are stored.
    #[error("there are no cafes in the database")]
    NoCafes,

    /// The store could not be read. The cause is logged, not sent.
    #[error("storage error")]
    Storage,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Get the error code string for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoCafes => "no_cafes",
            Self::Storage => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<ControlError> for ApiError {
    fn from(err: ControlError) -> Self {
        if matches!(err, ControlError::EmptyDirectory) {
            tracing::error!("Random cafe requested from an empty directory");
            Self::NoCafes
        } else {
            tracing::error!(error = %err, "Read route failed");
            Self::Storage
        }
    }
}
