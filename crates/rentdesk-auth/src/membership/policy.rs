//! Rules for changing a landlord's team.
//!
//! The owner ranks above every membership and is never managed through the
//! team path.

use rentdesk_core::error::AppError;
use rentdesk_core::types::{TenantId, UserId};

use crate::context::{TenantContext, TenantRef};
use crate::guard::Capability;

/// Fail with `Forbidden` when `target` owns the tenant.
pub fn ensure_not_owner(tenant: &TenantRef, target: UserId) -> Result<(), AppError> {
    if tenant.owner_id == target {
        return Err(AppError::forbidden(
            "The tenant owner's membership cannot be changed",
        ));
    }
    Ok(())
}

/// The capability needed to remove `target` from the team of `tenant_id`.
///
/// Members may always leave on their own; removing someone else takes an
/// admin.
pub fn removal_capability(ctx: &TenantContext, tenant_id: TenantId, target: UserId) -> Capability {
    if ctx.user_id() == Some(target) {
        Capability::ResourceOwner(target)
    } else {
        Capability::TenantAdmin(tenant_id)
    }
}
