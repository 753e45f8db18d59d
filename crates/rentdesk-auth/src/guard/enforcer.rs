//! Capability evaluation against a tenant context.

use tracing::{debug, error};

use rentdesk_core::error::AppError;
use rentdesk_entity::identity::SessionRole;

use crate::context::TenantContext;

use super::capability::Capability;
use super::decision::{AuthorizationDecision, DenialReason, MalformedRequest};

/// Decides whether a context holds a capability.
///
/// Stateless: the same context and capability always produce the same
/// decision. Super-admins are not tenant members by virtue of their role;
/// they hold `TenantAdmin`/`TenantMember` only through ownership or a
/// membership like anyone else.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    /// Creates a new guard.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a capability.
    ///
    /// Returns [`MalformedRequest`] when a tenant capability is checked
    /// against a context without a tenant.
    pub fn check(
        &self,
        ctx: &TenantContext,
        capability: &Capability,
    ) -> Result<AuthorizationDecision, MalformedRequest> {
        let user_id = ctx.user_id();

        let decision = match *capability {
            Capability::SuperAdminOnly => match ctx.role() {
                SessionRole::SuperAdmin => AuthorizationDecision::allow(),
                SessionRole::Anonymous => AuthorizationDecision::deny(DenialReason::Unauthenticated),
                SessionRole::Tenant
                | SessionRole::LandlordOwner
                | SessionRole::TeamAdmin
                | SessionRole::TeamMember => AuthorizationDecision::deny(DenialReason::Forbidden),
            },

            Capability::AuthenticatedOnly => match user_id {
                Some(_) => AuthorizationDecision::allow(),
                None => AuthorizationDecision::deny(DenialReason::Unauthenticated),
            },

            Capability::TenantAdmin(tenant_id) | Capability::TenantMember(tenant_id) => {
                let Some(tenant) = ctx.tenant() else {
                    error!(
                        capability = %capability,
                        role = %ctx.role(),
                        "Tenant capability checked without a tenant context"
                    );
                    return Err(MalformedRequest {
                        capability: *capability,
                    });
                };

                let relationship = ctx.relationship();
                let holds = match capability {
                    Capability::TenantAdmin(_) => relationship.is_admin(),
                    _ => relationship.is_member(),
                };

                if user_id.is_none() {
                    AuthorizationDecision::deny(DenialReason::Unauthenticated)
                } else if tenant.id == tenant_id && holds {
                    AuthorizationDecision::allow()
                } else {
                    AuthorizationDecision::deny(DenialReason::NotTenantMember)
                }
            }

            Capability::ResourceOwner(owner_id) => match user_id {
                Some(id) if id == owner_id => AuthorizationDecision::allow(),
                Some(_) => AuthorizationDecision::deny(DenialReason::Forbidden),
                None => AuthorizationDecision::deny(DenialReason::Unauthenticated),
            },
        };

        Ok(decision)
    }

    /// Evaluate a capability and convert a denial into a boundary error.
    pub fn require(&self, ctx: &TenantContext, capability: &Capability) -> Result<(), AppError> {
        let decision = self.check(ctx, capability)?;
        if let Some(reason) = decision.reason {
            debug!(
                capability = %capability,
                reason = reason.as_str(),
                user_id = ?ctx.user_id(),
                tenant_id = ?ctx.tenant_id(),
                "Capability denied"
            );
        }
        decision.into_result()
    }

    /// Whether any of the capabilities is held. Denials of the first
    /// capability are reported if none is.
    pub fn require_any(
        &self,
        ctx: &TenantContext,
        capabilities: &[Capability],
    ) -> Result<(), AppError> {
        let mut first_denial = None;
        for capability in capabilities {
            let decision = self.check(ctx, capability)?;
            if decision.is_allowed() {
                return Ok(());
            }
            first_denial.get_or_insert(decision);
        }
        first_denial
            .unwrap_or_else(|| AuthorizationDecision::deny(DenialReason::Forbidden))
            .into_result()
    }
}
