//! Start the RentDesk server.

use std::sync::Arc;

use clap::Args;

use rentdesk_core::error::AppError;
use rentdesk_database::migration::run_migrations;
use rentdesk_database::{MemoryStore, Stores};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the root domain tenants are served under
    #[arg(long)]
    pub root_domain: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,

    /// Serve from an empty in-memory store instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref root) = args.root_domain {
        config.tenancy.root_domain = root.clone();
    }
    config.validate()?;

    println!("Starting RentDesk server...");
    println!("  Address:     {}", config.server.bind_address());
    println!("  Root domain: {}", config.tenancy.root_domain);

    if args.in_memory {
        println!("  Store:       in-memory (data is lost on exit)");
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        return rentdesk_api::run_server(config, stores, None).await;
    }

    let pool = super::create_db_pool(&config).await?;
    if !args.no_migrate && config.database.auto_migrate {
        println!("Running database migrations...");
        run_migrations(pool.pool()).await?;
    }

    let stores = Stores::postgres(pool.pool().clone());
    let result = rentdesk_api::run_server(config, stores, Some(pool.clone())).await;
    pool.close().await;
    result
}
