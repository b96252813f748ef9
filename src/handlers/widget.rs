use axum::{
    Router,
    http::header,
    response::IntoResponse,
    routing::get,
};

use crate::db::AppState;

/// The widget loader script, embedded at compile time.
const EMBED_JS: &str = include_str!("../../assets/embed.js");

/// Serve the embeddable widget loader.
///
/// Merchants load this from arbitrary third-party origins, so the asset is
/// cacheable, cookie-free, and carries a permissive CORS header for
/// `crossorigin` script tags.
pub async fn serve_embed_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        EMBED_JS,
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/static/embed.js", get(serve_embed_script))
}
