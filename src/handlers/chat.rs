use axum::{
    Json, Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};
use serde::Serialize;

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::id::is_valid_tenant_id;
use crate::models::Tenant;

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        service: "kiosk",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Serve the per-tenant chat page loaded inside the widget iframe.
///
/// The conversation UI itself is delivered by a separate service; this shell
/// only confirms the tenant exists and carries its display attributes.
pub async fn tenant_chat(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
) -> Result<Html<String>> {
    // Cheap format check before touching the store.
    if !is_valid_tenant_id(&tenant_id) {
        return Err(AppError::NotFound("Unknown tenant".into()));
    }

    let conn = state.db.get()?;
    let tenant = queries::get_tenant_by_id(&conn, &tenant_id)?
        .ok_or_else(|| AppError::NotFound("Unknown tenant".into()))?;

    Ok(Html(render_chat_page(&tenant)))
}

fn render_chat_page(tenant: &Tenant) -> String {
    let title = tenant
        .product_name
        .as_deref()
        .or(tenant.company.as_deref())
        .unwrap_or("Chat");

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body data-tenant="{id}">
<h1>{title}</h1>
<p>This assistant is getting ready. Check back shortly.</p>
</body>
</html>
"#,
        title = escape_html(title),
        id = escape_html(&tenant.id),
    )
}

/// Tenant attributes come from an unauthenticated webhook; escape them
/// before they reach markup.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status))
        .route("/t/{tenant_id}", get(tenant_chat))
}
