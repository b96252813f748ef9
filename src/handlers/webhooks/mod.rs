pub mod gumroad;

pub use gumroad::handle_gumroad_webhook;

use axum::{Router, routing::post};

use crate::db::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/webhooks/gumroad", post(handle_gumroad_webhook))
}
