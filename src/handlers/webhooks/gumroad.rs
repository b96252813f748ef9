use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
};
use serde::{Deserialize, Serialize};

use crate::db::{AppState, queries};
use crate::error::{AppError, Result};
use crate::models::ProvisionTenant;

/// Raw Gumroad sale notification. Gumroad posts form-encoded bodies by
/// default and JSON when configured; field names vary across ping versions,
/// so aliases are collapsed in [`GumroadEvent::normalize`]. Custom fields
/// arrive as flat `custom_fields[...]` keys.
///
/// No sender authentication is performed here. Before production exposure
/// this handler needs a shared-secret check on the incoming request.
#[derive(Debug, Default, Deserialize)]
pub struct GumroadEvent {
    #[serde(default)]
    pub purchaser_email: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub purchaser_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, rename = "custom_fields[website]")]
    pub custom_website: Option<String>,
    #[serde(default, rename = "custom_fields[company]")]
    pub custom_company: Option<String>,
}

impl GumroadEvent {
    /// Collapse field aliases into a provisioning input. Custom-field keys
    /// take precedence over their flat counterparts; empty strings count as
    /// absent.
    pub fn normalize(self) -> ProvisionTenant {
        ProvisionTenant {
            purchaser_email: non_empty(self.purchaser_email)
                .or_else(|| non_empty(self.email))
                .unwrap_or_default(),
            full_name: non_empty(self.full_name).or_else(|| non_empty(self.purchaser_name)),
            company: non_empty(self.custom_company).or_else(|| non_empty(self.company)),
            website: non_empty(self.custom_website).or_else(|| non_empty(self.website)),
            product_name: non_empty(self.product_name).or_else(|| non_empty(self.product)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
pub struct ProvisionResponse {
    pub tenant_id: String,
    pub chat_url: String,
    pub embed_snippet: String,
}

impl ProvisionResponse {
    fn build(public_base_url: &str, tenant_id: &str) -> Self {
        let base = public_base_url.trim_end_matches('/');
        Self {
            tenant_id: tenant_id.to_string(),
            chat_url: format!("{base}/t/{tenant_id}"),
            embed_snippet: format!(
                "<script src=\"{base}/static/embed.js\" data-tenant=\"{tenant_id}\" async></script>"
            ),
        }
    }
}

pub async fn handle_gumroad_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ProvisionResponse>> {
    let event = parse_event(&headers, &body)?;
    let input = event.normalize();
    input.validate()?;

    let conn = state.db.get()?;
    let tenant = queries::get_or_create_tenant(&conn, &input)?;

    tracing::info!(
        tenant_id = %tenant.id,
        "Gumroad purchase processed"
    );

    Ok(Json(ProvisionResponse::build(
        &state.public_base_url,
        &tenant.id,
    )))
}

fn parse_event(headers: &HeaderMap, body: &Bytes) -> Result<GumroadEvent> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("application/json") {
        serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    } else {
        serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid form body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefers_canonical_fields() {
        let event = GumroadEvent {
            purchaser_email: Some("a@example.com".into()),
            email: Some("b@example.com".into()),
            full_name: Some("Marie".into()),
            purchaser_name: Some("Other".into()),
            ..Default::default()
        };
        let input = event.normalize();
        assert_eq!(input.purchaser_email, "a@example.com");
        assert_eq!(input.full_name.as_deref(), Some("Marie"));
    }

    #[test]
    fn test_normalize_falls_back_through_aliases() {
        let event = GumroadEvent {
            email: Some("b@example.com".into()),
            purchaser_name: Some("Marie".into()),
            product: Some("Betty Immo".into()),
            custom_website: Some("https://agence-dupont.fr".into()),
            ..Default::default()
        };
        let input = event.normalize();
        assert_eq!(input.purchaser_email, "b@example.com");
        assert_eq!(input.full_name.as_deref(), Some("Marie"));
        assert_eq!(input.product_name.as_deref(), Some("Betty Immo"));
        assert_eq!(input.website.as_deref(), Some("https://agence-dupont.fr"));
    }

    #[test]
    fn test_normalize_treats_empty_as_absent() {
        let event = GumroadEvent {
            purchaser_email: Some("  ".into()),
            email: Some("b@example.com".into()),
            website: Some("".into()),
            ..Default::default()
        };
        let input = event.normalize();
        assert_eq!(input.purchaser_email, "b@example.com");
        assert!(input.website.is_none());
    }

    #[test]
    fn test_embed_snippet_binds_tenant() {
        let resp = ProvisionResponse::build("https://chat.example.com/", "tn_abc");
        assert_eq!(resp.chat_url, "https://chat.example.com/t/tn_abc");
        assert!(resp.embed_snippet.contains("data-tenant=\"tn_abc\""));
        assert!(
            resp.embed_snippet
                .contains("src=\"https://chat.example.com/static/embed.js\"")
        );
    }
}
