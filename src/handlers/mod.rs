pub mod chat;
pub mod webhooks;
pub mod widget;

use axum::Router;

use crate::db::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(chat::router())
        .merge(webhooks::router())
        .merge(widget::router())
}
