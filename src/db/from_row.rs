//! Row mapping trait and helpers for reducing boilerplate in queries.

use rusqlite::{Connection, OptionalExtension, Row, ToSql};

use crate::models::Tenant;

/// Trait for constructing a type from a database row.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Query for a single optional result.
pub fn query_one<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Option<T>> {
    conn.query_row(sql, params, T::from_row)
        .optional()
        .map_err(Into::into)
}

pub const TENANT_COLS: &str =
    "id, purchaser_email, full_name, company, website, product_name, created_at";

impl FromRow for Tenant {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Tenant {
            id: row.get(0)?,
            purchaser_email: row.get(1)?,
            full_name: row.get(2)?,
            company: row.get(3)?,
            website: row.get(4)?,
            product_name: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
