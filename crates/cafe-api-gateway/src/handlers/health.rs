//! Health check endpoint.
//!
//! This module provides the public health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use cafe_api_auth::AccessGuard;
use cafe_api_control::CafeDirectory;

use crate::state::GatewayState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of stored cafes, absent when the store is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafes: Option<u64>,
}

/// Health check handler.
///
/// Returns the current service status together with the number of stored
/// cafes. This endpoint is public.
///
/// # Example
///
/// ```text
/// GET /health
///
/// Response: 200 OK
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "cafes": 12
/// }
/// ```
pub async fn health<D, G>(State(state): State<Arc<GatewayState<D, G>>>) -> impl IntoResponse
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    let version = env!("CARGO_PKG_VERSION");

    match state.directory.cafe_count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                version,
                cafes: Some(count),
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not read the store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                    cafes: None,
                }),
            )
        }
    }
}
