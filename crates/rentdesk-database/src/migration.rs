//! Schema migrations for tenants, memberships, properties and applications.

use std::collections::HashSet;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use rentdesk_core::error::{AppError, ErrorKind};

/// Migrations embedded from the workspace `migrations/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// A migration that has not been applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMigration {
    /// Timestamp version from the file name.
    pub version: i64,
    /// Description from the file name.
    pub description: String,
}

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let pending = pending_migrations(pool).await?;
    if pending.is_empty() {
        info!("Schema is up to date");
        return Ok(());
    }

    info!(count = pending.len(), "Applying migrations");
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    for migration in &pending {
        info!(
            version = migration.version,
            description = %migration.description,
            "Applied migration"
        );
    }
    Ok(())
}

/// List embedded migrations the database has not successfully applied.
pub async fn pending_migrations(pool: &PgPool) -> Result<Vec<PendingMigration>, AppError> {
    let tracked: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to inspect schema", e)
            })?;

    let applied: HashSet<i64> = if tracked {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read applied migrations", e)
            })?
            .into_iter()
            .collect()
    } else {
        HashSet::new()
    };

    Ok(MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration() && !applied.contains(&m.version))
        .map(|m| PendingMigration {
            version: m.version,
            description: m.description.to_string(),
        })
        .collect())
}
