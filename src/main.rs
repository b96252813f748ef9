use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiosk::config::Config;
use kiosk::db::{AppState, create_pool, init_db};
use kiosk::handlers;

#[derive(Parser, Debug)]
#[command(name = "kiosk")]
#[command(about = "Tenant provisioning and chat widget delivery")]
struct Cli {
    /// Delete the database on exit (dev mode only, useful for fresh starts)
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kiosk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    if config.dev_mode {
        tracing::info!("Running in DEVELOPMENT mode");
    }

    // Create database connection pool and initialize the schema
    let db_pool = create_pool(&config.database_path).expect("Failed to create database pool");
    {
        let conn = db_pool.get().expect("Failed to get connection");
        init_db(&conn).expect("Failed to initialize database");
    }

    let state = AppState {
        db: db_pool,
        public_base_url: config.public_base_url.clone(),
    };

    let app = handlers::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    let cleanup_on_exit = cli.ephemeral && config.dev_mode;
    if cli.ephemeral && !config.dev_mode {
        tracing::warn!("--ephemeral flag ignored: not in dev mode (set KIOSK_ENV=dev)");
    }
    if cleanup_on_exit {
        tracing::info!("EPHEMERAL MODE: database will be deleted on exit");
    }
    let db_path = config.database_path.clone();

    tracing::info!("Kiosk server listening on {}", addr);
    tracing::info!("Public base URL: {}", config.public_base_url);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    // Cleanup on exit if ephemeral mode
    if cleanup_on_exit {
        tracing::info!("Cleaning up ephemeral database...");
        if let Err(e) = std::fs::remove_file(&db_path) {
            tracing::warn!("Failed to remove {}: {}", db_path, e);
        } else {
            tracing::info!("Removed {}", db_path);
        }
        // Also remove WAL and SHM files if they exist
        let _ = std::fs::remove_file(format!("{}-wal", db_path));
        let _ = std::fs::remove_file(format!("{}-shm", db_path));
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
