use rusqlite::Connection;

/// Initialize the database schema
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        -- Tenants (one per purchaser, append-only)
        -- purchaser_email is the idempotency key: the UNIQUE constraint is
        -- what makes webhook redelivery and concurrent delivery safe.
        CREATE TABLE IF NOT EXISTS tenants (
            id TEXT PRIMARY KEY,
            purchaser_email TEXT NOT NULL UNIQUE,
            full_name TEXT,
            company TEXT,
            website TEXT,
            product_name TEXT,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_tenants_email ON tenants(purchaser_email);
        "#,
    )?;
    Ok(())
}
