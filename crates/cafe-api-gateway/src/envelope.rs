//! Fixed-shape response envelopes for the mutating routes.
//!
//! Clients of the cafe API match on these exact bodies, so the wording and
//! status codes are part of the contract:
//!
//! - `{"response": {"success": "..."}}`
//! - `{"response": {"error": "..."}}`
//! - `{"error": {"Not Found": "..."}}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message sent when an id does not resolve to a cafe.
pub const NOT_FOUND_MESSAGE: &str = "Sorry a cafe with that id was not found in the database.";

/// Message sent when `/add` fails for any reason other than an unknown field.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add requested cafe to database";

/// Message sent when `/report-closed` is called with the wrong key.
pub const INCORRECT_KEY_MESSAGE: &str = "Incorrect API Key!";

/// Outcome carried inside a `response` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Serialized as `{"success": message}`.
    Success(String),
    /// Serialized as `{"error": message}`.
    Error(String),
}

#[derive(Debug, Serialize)]
struct ResponseBody {
    response: Outcome,
}

#[derive(Debug, Serialize)]
struct NotFoundBody {
    error: NotFoundDetail,
}

#[derive(Debug, Serialize)]
struct NotFoundDetail {
    #[serde(rename = "Not Found")]
    not_found: &'static str,
}

/// A response envelope together with its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    /// `{"response": {...}}` with the given status.
    Response {
        /// HTTP status code.
        status: StatusCode,
        /// Success or error outcome.
        outcome: Outcome,
    },
    /// `{"error": {"Not Found": ...}}` with 404.
    NotFound,
}

impl Envelope {
    fn success(message: impl Into<String>) -> Self {
        Self::Response {
            status: StatusCode::OK,
            outcome: Outcome::Success(message.into()),
        }
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Response {
            status,
            outcome: Outcome::Error(message.into()),
        }
    }

    /// A cafe was inserted.
    #[must_use]
    pub fn added(name: &str) -> Self {
        Self::success(format!("Successfully added Cafe: {name}!"))
    }

    /// `/add` failed; the cause is not exposed.
    #[must_use]
    pub fn add_failed() -> Self {
        Self::error(StatusCode::OK, ADD_FAILED_MESSAGE)
    }

    /// `/add` named a parameter that is not a cafe field.
    #[must_use]
    pub fn unknown_field(field: &str) -> Self {
        Self::error(StatusCode::OK, format!("Unknown field: {field}"))
    }

    /// A coffee price was updated.
    #[must_use]
    pub fn price_updated() -> Self {
        Self::success("Successfully updated the price.")
    }

    /// A cafe was deleted.
    #[must_use]
    pub fn deleted() -> Self {
        Self::success("Successfully deleted the cafe!")
    }

    /// The API key did not match. Reported as 404 like an unknown cafe.
    #[must_use]
    pub fn incorrect_key() -> Self {
        Self::error(StatusCode::NOT_FOUND, INCORRECT_KEY_MESSAGE)
    }

    /// The id did not resolve to a cafe, or the operation failed.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::NotFound
    }

    /// Get the HTTP status code for this envelope.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Response { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        match self {
            Self::Response { status, outcome } => {
                (status, Json(ResponseBody { response: outcome })).into_response()
            }
            Self::NotFound => {
                let body = NotFoundBody {
                    error: NotFoundDetail {
                        not_found: NOT_FOUND_MESSAGE,
                    },
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}
