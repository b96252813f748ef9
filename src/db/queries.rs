use chrono::Utc;
use rusqlite::{Connection, params};

use crate::error::{AppError, Result};
use crate::id::gen_tenant_id;
use crate::models::{ProvisionTenant, Tenant};

use super::from_row::{TENANT_COLS, query_one};

fn now() -> i64 {
    Utc::now().timestamp()
}

pub fn get_tenant_by_id(conn: &Connection, id: &str) -> Result<Option<Tenant>> {
    query_one(
        conn,
        &format!("SELECT {} FROM tenants WHERE id = ?", TENANT_COLS),
        &[&id],
    )
}

pub fn get_tenant_by_email(conn: &Connection, email: &str) -> Result<Option<Tenant>> {
    query_one(
        conn,
        &format!("SELECT {} FROM tenants WHERE purchaser_email = ?", TENANT_COLS),
        &[&email],
    )
}

/// Look up the tenant for a purchaser email, creating it on first sight.
///
/// First write wins: attributes from later events for the same email are
/// discarded. Safe under concurrent callers racing on the same email - the
/// UNIQUE constraint on `purchaser_email` is the serialization point, and a
/// loser of the race re-reads the winner's row instead of erroring.
pub fn get_or_create_tenant(conn: &Connection, input: &ProvisionTenant) -> Result<Tenant> {
    if let Some(existing) = get_tenant_by_email(conn, &input.purchaser_email)? {
        return Ok(existing);
    }

    let id = gen_tenant_id();
    let inserted = conn.execute(
        "INSERT INTO tenants (id, purchaser_email, full_name, company, website, product_name, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(purchaser_email) DO NOTHING",
        params![
            id,
            input.purchaser_email,
            input.full_name,
            input.company,
            input.website,
            input.product_name,
            now(),
        ],
    )?;

    if inserted == 0 {
        // Lost the race to a concurrent delivery of the same purchase.
        return get_tenant_by_email(conn, &input.purchaser_email)?.ok_or_else(|| {
            AppError::Internal("Tenant vanished after conflicting insert".into())
        });
    }

    get_tenant_by_id(conn, &id)?
        .ok_or_else(|| AppError::Internal("Tenant missing after insert".into()))
}

pub fn count_tenants(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM tenants", [], |row| row.get(0))?;
    Ok(count)
}
