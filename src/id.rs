//! Prefixed ID generation for Kiosk tenants.
//!
//! Tenant IDs double as the path segment of the public chat URL
//! (`/t/<tenant_id>`), so they must be URL-safe and unguessable. They are
//! never derived from purchaser data and never sequential.
//!
//! Format: `tn_{uuid_simple}` (32 hex chars, no hyphens)

use uuid::Uuid;

const TENANT_PREFIX: &str = "tn_";

/// Generates a new tenant ID.
///
/// Backed by a v4 UUID, i.e. 122 bits from the OS RNG.
pub fn gen_tenant_id() -> String {
    format!("{}{}", TENANT_PREFIX, Uuid::new_v4().as_simple())
}

/// Validate that a string is a well-formed tenant ID.
///
/// This is a cheap check to reject garbage before hitting the database.
/// Validates format: `tn_{32_hex_chars}`
pub fn is_valid_tenant_id(s: &str) -> bool {
    let Some(hex_part) = s.strip_prefix(TENANT_PREFIX) else {
        return false;
    };

    hex_part.len() == 32 && hex_part.chars().all(|c| c.is_ascii_hexdigit())
}
