//! Database migration management commands.

use clap::{Args, Subcommand};

use rentdesk_core::error::AppError;
use rentdesk_database::migration::{pending_migrations, run_migrations};

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// List migrations that have not been applied
    Check,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(pool.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Check => {
            pool.health_check().await?;
            let pending = pending_migrations(pool.pool()).await?;
            if pending.is_empty() {
                output::print_success("Schema is up to date.");
            } else {
                println!("{} pending migration(s):", pending.len());
                for migration in &pending {
                    output::print_kv(&migration.version.to_string(), &migration.description);
                }
            }
        }
    }

    pool.close().await;
    Ok(())
}
