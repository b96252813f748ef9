//! Test utilities and fixtures for Kiosk integration tests

#![allow(dead_code)]

use axum::Router;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

pub use kiosk::db::{AppState, DbPool, init_db, queries};
pub use kiosk::handlers;
pub use kiosk::models::*;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Create an in-memory test database with schema initialized
pub fn setup_test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    init_db(&conn).expect("Failed to initialize schema");
    conn
}

/// Create an AppState backed by a temp-file database, so every pooled
/// connection observes the same store (an in-memory database would give each
/// connection its own).
pub fn create_test_app_state() -> AppState {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("kiosk-test.db");
    // Keep the directory alive for the rest of the test process.
    std::mem::forget(dir);

    let manager = SqliteConnectionManager::file(&db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
    });
    let pool = Pool::builder().max_size(8).build(manager).unwrap();
    {
        let conn = pool.get().unwrap();
        init_db(&conn).unwrap();
    }

    AppState {
        db: pool,
        public_base_url: TEST_BASE_URL.to_string(),
    }
}

/// Create a Router with the full application surface
pub fn app(state: AppState) -> Router {
    handlers::router().with_state(state)
}

/// Provisioning input with the standard test attributes
pub fn provision_input(email: &str) -> ProvisionTenant {
    ProvisionTenant {
        purchaser_email: email.to_string(),
        full_name: Some("Marie Client".to_string()),
        company: Some("Agence Dupont".to_string()),
        website: Some("https://agence-dupont.fr".to_string()),
        product_name: Some("Betty Immo".to_string()),
    }
}
