//! Reading the tenant context inside services.

use rentdesk_auth::{TenantContext, TenantRef};
use rentdesk_core::error::AppError;
use rentdesk_core::types::UserId;

/// The tenant the request is addressed to.
///
/// Tenant-scoped operations are not reachable on the root domain; they
/// read as "not found" there.
pub fn context_tenant(ctx: &TenantContext) -> Result<&TenantRef, AppError> {
    ctx.tenant()
        .ok_or_else(|| AppError::not_found("No tenant is served at this address"))
}

/// The acting user. Call after a capability that implies authentication.
pub fn acting_user(ctx: &TenantContext) -> Result<UserId, AppError> {
    ctx.user_id()
        .ok_or_else(|| AppError::unauthenticated("Authentication required"))
}

/// Fail with a validation error when `value` is blank.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
