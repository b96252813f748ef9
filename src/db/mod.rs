mod from_row;
mod schema;
pub mod queries;

pub use schema::init_db;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Application state holding the database pool and configuration
#[derive(Clone)]
pub struct AppState {
    /// Tenant database pool
    pub db: DbPool,
    /// Public-facing base URL for chat URLs and embed snippets
    /// (e.g., https://chat.example.com)
    pub public_base_url: String,
}

pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    // WAL + busy_timeout: duplicate webhook deliveries race on the
    // purchaser_email uniqueness constraint; concurrent writers must queue
    // on the lock instead of surfacing SQLITE_BUSY.
    let manager = SqliteConnectionManager::file(database_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
    });
    Pool::builder().max_size(10).build(manager)
}
