//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod tenancy;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::tenancy::TenancyConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "RENTDESK";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Session token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Subdomain tenancy settings.
    pub tenancy: TenancyConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the given file with an optional `config/{env}.toml` overlay
    /// (where `env` comes from `RENTDESK_ENV`) and environment variables
    /// prefixed with `RENTDESK__`, e.g. `RENTDESK__TENANCY__ROOT_DOMAIN`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let env = std::env::var("RENTDESK_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("tenancy.reserved_slugs")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tenancy.root_domain.trim().is_empty() {
            return Err(AppError::configuration("tenancy.root_domain must not be empty"));
        }
        if self.auth.session_secret.len() < 16 {
            return Err(AppError::configuration(
                "auth.session_secret must be at least 16 bytes",
            ));
        }
        self.database.validate()
    }
}
