//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use cafe_api_auth::AccessGuard;
use cafe_api_control::CafeDirectory;

use crate::handlers::{cafes, health, home};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /` - Landing page
/// - `GET /health` - Health check
///
/// ## Reads
/// - `GET /random` - One random cafe
/// - `GET /all` - Every cafe keyed by id
/// - `GET /search?location=` - Cafes at a location keyed by id
///
/// ## Writes
/// - `GET|POST /add?<field>=<value>...` - Add a cafe
/// - `GET|PATCH /update-price/:cafe_id?coffee_price=` - Set the coffee price
/// - `GET|DELETE /report-closed/:cafe_id?api-key=` - Delete a cafe (keyed)
pub fn create_router<D, G>(state: GatewayState<D, G>) -> Router
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    // Extract config values before moving state
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();

    let state = Arc::new(state);

    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health::<D, G>))
        // Reads
        .route("/random", get(cafes::random_cafe::<D, G>))
        .route("/all", get(cafes::all_cafes::<D, G>))
        .route("/search", get(cafes::search_cafes::<D, G>))
        // Writes
        .route(
            "/add",
            get(cafes::add_cafe::<D, G>).post(cafes::add_cafe::<D, G>),
        )
        .route(
            "/update-price/:cafe_id",
            get(cafes::update_price::<D, G>).patch(cafes::update_price::<D, G>),
        )
        .route(
            "/report-closed/:cafe_id",
            get(cafes::report_closed::<D, G>).delete(cafes::report_closed::<D, G>),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
///
/// An empty list or a `*` entry allows any origin. Entries that are not valid
/// header values are skipped with a warning.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
    use axum_test::TestServer;

    fn server_with(origins: &[&str]) -> TestServer {
        let origins: Vec<String> = origins.iter().map(|o| (*o).to_string()).collect();
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(build_cors_layer(&origins));
        TestServer::new(app).unwrap()
    }

    async fn allowed_origin(server: &TestServer, origin: &'static str) -> Option<String> {
        let response = server
            .get("/")
            .add_header(ORIGIN, HeaderValue::from_static(origin))
            .await;
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn cors_wildcard_allows_any_origin() {
        let server = server_with(&["*"]);
        assert_eq!(
            allowed_origin(&server, "https://anywhere.example").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn cors_empty_list_allows_any_origin() {
        let server = server_with(&[]);
        assert_eq!(
            allowed_origin(&server, "https://anywhere.example").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn cors_specific_origins() {
        let server = server_with(&[
            "http://localhost:3000",
            "https://cafes.example.com",
            "not a header\nvalue",
        ]);

        assert_eq!(
            allowed_origin(&server, "https://cafes.example.com").await.as_deref(),
            Some("https://cafes.example.com")
        );
        assert_eq!(allowed_origin(&server, "https://evil.example").await, None);
    }
}
