//! Landing page.

use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the static page describing the API.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
