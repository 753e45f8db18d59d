//! PostgreSQL pool settings for the tenant and property stores.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Pool and migration settings.
///
/// Every request assembling a tenant context holds a connection for its
/// slug, ownership and membership lookups, so `max_connections` bounds how
/// many tenant requests can resolve at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connections kept open while idle.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// How long a caller waits for a pooled connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connections above `min_connections` are closed after this long.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Apply pending migrations when the server starts.
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// Connection acquire timeout.
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Idle connection timeout.
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_seconds)
    }

    /// Reject settings the pool would refuse or silently misbehave on.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.url.starts_with("postgres://") || self.url.starts_with("postgresql://")) {
            return Err(AppError::configuration(
                "database.url must be a postgres:// or postgresql:// URL",
            ));
        }
        if self.max_connections == 0 {
            return Err(AppError::configuration(
                "database.max_connections must be at least 1",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(AppError::configuration(format!(
                "database.min_connections ({}) exceeds max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    2
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_auto_migrate() -> bool {
    true
}
