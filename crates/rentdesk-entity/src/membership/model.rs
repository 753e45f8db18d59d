//! Team membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rentdesk_core::types::{MembershipId, TenantId, UserId};

use super::role::MemberRole;

/// Links a user to a landlord's team. At most one row per `(tenant_id, user_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TeamMembership {
    /// Unique membership identifier.
    pub id: MembershipId,
    /// The landlord this membership belongs to.
    pub tenant_id: TenantId,
    /// The member.
    pub user_id: UserId,
    /// Role within the team.
    pub role: MemberRole,
    /// Who added the member.
    pub invited_by: Option<UserId>,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to add a member to a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMembership {
    /// The landlord.
    pub tenant_id: TenantId,
    /// The user being added.
    pub user_id: UserId,
    /// Initial role.
    pub role: MemberRole,
    /// The acting owner or admin.
    pub invited_by: UserId,
}
