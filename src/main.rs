//! RentDesk Server — multi-tenant property management
//!
//! Main entry point: loads configuration, prepares the database, and serves
//! every landlord subdomain from one process.

use tracing_subscriber::{EnvFilter, fmt};

use rentdesk_core::config::AppConfig;
use rentdesk_core::error::AppError;
use rentdesk_database::migration::run_migrations;
use rentdesk_database::{DatabasePool, Stores};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file, the environment overlay, and `RENTDESK__*` variables
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("RENTDESK_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        root_domain = %config.tenancy.root_domain,
        "Starting RentDesk"
    );

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let pool = DatabasePool::connect(&config.database).await?;

    if config.database.auto_migrate {
        run_migrations(pool.pool()).await?;
    } else {
        tracing::info!("Automatic migrations disabled");
    }

    // ── Step 2: Stores ───────────────────────────────────────────
    let stores = Stores::postgres(pool.pool().clone());

    // ── Step 3: HTTP server ──────────────────────────────────────
    let result = rentdesk_api::run_server(config, stores, Some(pool.clone())).await;

    pool.close().await;
    tracing::info!("RentDesk server shut down");
    result
}
