//! Landlord team management: list, add, re-role, and remove members.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use rentdesk_auth::membership::{ensure_not_owner, removal_capability};
use rentdesk_auth::{AuthorizationGuard, Capability, TenantContext};
use rentdesk_core::error::AppError;
use rentdesk_core::types::UserId;
use rentdesk_database::store::TeamStore;
use rentdesk_entity::membership::{MemberRole, NewMembership, TeamMembership};

use crate::context::{acting_user, context_tenant};

/// Manages the team of the context tenant.
#[derive(Clone)]
pub struct TeamService {
    /// Membership store.
    team: Arc<dyn TeamStore>,
    /// Authorization guard.
    guard: AuthorizationGuard,
}

impl std::fmt::Debug for TeamService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamService").finish_non_exhaustive()
    }
}

/// Request to add a user to the team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    /// The user to add.
    pub user_id: UserId,
    /// Their role.
    pub role: MemberRole,
}

/// Request to change a member's role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// The new role.
    pub role: MemberRole,
}

impl TeamService {
    /// Creates a new team service.
    pub fn new(team: Arc<dyn TeamStore>, guard: AuthorizationGuard) -> Self {
        Self { team, guard }
    }

    /// Lists the team. Any member may look.
    pub async fn list_members(&self, ctx: &TenantContext) -> Result<Vec<TeamMembership>, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard
            .require(ctx, &Capability::TenantMember(tenant.id))?;

        self.team.list_members(tenant.id).await
    }

    /// Adds a member. Requires an admin; the owner is never added.
    pub async fn add_member(
        &self,
        ctx: &TenantContext,
        req: AddMemberRequest,
    ) -> Result<TeamMembership, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::TenantAdmin(tenant.id))?;
        ensure_not_owner(tenant, req.user_id)?;

        let actor = acting_user(ctx)?;
        let membership = self
            .team
            .add_member(&NewMembership {
                tenant_id: tenant.id,
                user_id: req.user_id,
                role: req.role,
                invited_by: actor,
            })
            .await?;

        info!(
            actor_id = %actor,
            tenant_id = %tenant.id,
            member_id = %membership.user_id,
            role = %membership.role,
            "Team member added"
        );

        Ok(membership)
    }

    /// Changes a member's role. Requires an admin; the owner is immutable.
    pub async fn change_role(
        &self,
        ctx: &TenantContext,
        user_id: UserId,
        req: ChangeRoleRequest,
    ) -> Result<TeamMembership, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::TenantAdmin(tenant.id))?;
        ensure_not_owner(tenant, user_id)?;

        let membership = self
            .team
            .update_member_role(tenant.id, user_id, req.role)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))?;

        info!(
            actor_id = ?ctx.user_id(),
            tenant_id = %tenant.id,
            member_id = %user_id,
            role = %membership.role,
            "Team member role changed"
        );

        Ok(membership)
    }

    /// Removes a member. Admins may remove anyone but the owner; members
    /// may remove themselves.
    pub async fn remove_member(&self, ctx: &TenantContext, user_id: UserId) -> Result<(), AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard
            .require(ctx, &removal_capability(ctx, tenant.id, user_id))?;
        ensure_not_owner(tenant, user_id)?;

        if !self.team.remove_member(tenant.id, user_id).await? {
            return Err(AppError::not_found("Member not found"));
        }

        info!(
            actor_id = ?ctx.user_id(),
            tenant_id = %tenant.id,
            member_id = %user_id,
            "Team member removed"
        );

        Ok(())
    }
}
