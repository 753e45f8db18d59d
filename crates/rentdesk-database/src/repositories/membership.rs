//! Team membership repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use rentdesk_core::error::{AppError, ErrorKind};
use rentdesk_core::result::AppResult;
use rentdesk_core::types::{MembershipId, TenantId, UserId};
use rentdesk_entity::membership::{MemberRole, NewMembership, TeamMembership};

use super::map_write_error;
use crate::store::TeamStore;

/// Repository for `team_memberships`. Every query is keyed by `tenant_id`.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamStore for MembershipRepository {
    async fn list_members(&self, tenant_id: TenantId) -> AppResult<Vec<TeamMembership>> {
        sqlx::query_as::<_, TeamMembership>(
            "SELECT * FROM team_memberships WHERE tenant_id = $1 ORDER BY created_at ASC",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))
    }

    async fn add_member(&self, data: &NewMembership) -> AppResult<TeamMembership> {
        sqlx::query_as::<_, TeamMembership>(
            "INSERT INTO team_memberships (id, tenant_id, user_id, role, invited_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(MembershipId::new())
        .bind(data.tenant_id)
        .bind(data.user_id)
        .bind(data.role)
        .bind(data.invited_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "Failed to add member",
                "User is already a member of this team",
            )
        })
    }

    async fn update_member_role(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        role: MemberRole,
    ) -> AppResult<Option<TeamMembership>> {
        sqlx::query_as::<_, TeamMembership>(
            "UPDATE team_memberships SET role = $3 \
             WHERE tenant_id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update member", e))
    }

    async fn remove_member(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM team_memberships WHERE tenant_id = $1 AND user_id = $2")
                .bind(tenant_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove member", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
