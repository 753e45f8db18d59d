//! CLI command definitions and dispatch.

pub mod migrate;
pub mod resolve;
pub mod serve;
pub mod tenant;
pub mod token;

use clap::{Parser, Subcommand};

use rentdesk_core::config::AppConfig;
use rentdesk_core::error::AppError;
use rentdesk_database::DatabasePool;

use crate::output::OutputFormat;

/// RentDesk — multi-tenant property management
#[derive(Debug, Parser)]
#[command(name = "rentdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the RentDesk server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Tenant (landlord subdomain) management
    Tenant(tenant::TenantArgs),
    /// Issue a session token for local testing
    Token(token::TokenArgs),
    /// Show which tenant a host name maps to
    Resolve(resolve::ResolveArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Tenant(args) => tenant::execute(args, &self.config, self.format).await,
            Commands::Token(args) => token::execute(args, &self.config, self.format).await,
            Commands::Resolve(args) => resolve::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
