//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use rentdesk_auth::{HostResolver, SessionDecoder, TenantContextBuilder};
use rentdesk_core::config::AppConfig;
use rentdesk_database::{DatabasePool, Stores};
use rentdesk_service::Services;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL pool, absent when running on the in-memory store
    pub database: Option<DatabasePool>,

    // ── Tenancy ──────────────────────────────────────────────
    /// Maps the `Host` header to a tenant slug
    pub resolver: Arc<HostResolver>,
    /// Verifies session tokens
    pub sessions: Arc<SessionDecoder>,
    /// Builds the per-request tenant context
    pub contexts: Arc<TenantContextBuilder>,

    // ── Services ─────────────────────────────────────────────
    /// Tenant-scoped business services
    pub services: Services,
}

impl AppState {
    /// Wires the state from configuration and a set of stores.
    pub fn new(config: AppConfig, stores: &Stores) -> Self {
        let contexts = Arc::new(TenantContextBuilder::new(
            stores.directory.clone(),
            &config.tenancy,
        ));
        let services = Services::new(stores, contexts.clone(), &config.tenancy);

        Self {
            resolver: Arc::new(HostResolver::from_config(&config.tenancy)),
            sessions: Arc::new(SessionDecoder::new(&config.auth)),
            contexts,
            services,
            database: None,
            config: Arc::new(config),
        }
    }

    /// Attaches the database pool used for readiness checks.
    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}
