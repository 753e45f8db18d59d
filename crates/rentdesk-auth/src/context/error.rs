//! Failures while assembling a tenant context.

use thiserror::Error;

use rentdesk_core::error::AppError;
use rentdesk_entity::tenant::TenantSlug;

/// Why a tenant context could not be assembled.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The host named a slug with no active landlord behind it. Terminal:
    /// the request never falls back to the root context.
    #[error("no tenant matches slug '{0}'")]
    TenantNotFound(TenantSlug),
    /// The tenant or membership lookup did not finish in time.
    #[error("tenant lookup timed out")]
    Timeout,
    /// The store failed.
    #[error("tenant lookup failed: {0}")]
    Store(#[source] AppError),
}

impl From<ContextError> for AppError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::TenantNotFound(_) => AppError::not_found("Tenant not found"),
            ContextError::Timeout => AppError::timeout("Tenant lookup timed out"),
            ContextError::Store(inner) => inner,
        }
    }
}
