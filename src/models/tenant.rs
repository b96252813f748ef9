use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A provisioned tenant. Created exactly once per purchaser email and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub purchaser_email: String,
    pub full_name: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub product_name: Option<String>,
    pub created_at: i64,
}

/// Normalized input for tenant provisioning.
#[derive(Debug, Clone)]
pub struct ProvisionTenant {
    pub purchaser_email: String,
    pub full_name: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub product_name: Option<String>,
}

impl ProvisionTenant {
    pub fn validate(&self) -> Result<()> {
        if self.purchaser_email.trim().is_empty() {
            return Err(AppError::BadRequest("purchaser_email is required".into()));
        }
        if !is_plausible_email(&self.purchaser_email) {
            return Err(AppError::BadRequest(
                "purchaser_email is not a valid email address".into(),
            ));
        }
        Ok(())
    }
}

/// Syntactic plausibility check, not RFC 5321 validation: one `@`, non-empty
/// local part, dotted domain, no whitespace. The commerce platform already
/// holds a deliverable address; this only rejects mangled payloads.
pub fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("client@example.com"));
        assert!(is_plausible_email("marie.client+tag@agence-dupont.fr"));
        assert!(is_plausible_email("a@b.co"));
    }

    #[test]
    fn test_implausible_emails() {
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("client"));
        assert!(!is_plausible_email("client@"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("client@example"));
        assert!(!is_plausible_email("client@@example.com"));
        assert!(!is_plausible_email("client@.com")); // empty host
        assert!(!is_plausible_email("client@example.")); // empty tld
        assert!(!is_plausible_email("cli ent@example.com"));
    }

    #[test]
    fn test_validate_requires_email() {
        let input = ProvisionTenant {
            purchaser_email: "".into(),
            full_name: None,
            company: None,
            website: None,
            product_name: None,
        };
        assert!(input.validate().is_err());
    }
}
