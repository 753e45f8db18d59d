//! Tenant repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use rentdesk_core::error::{AppError, ErrorKind};
use rentdesk_core::result::AppResult;
use rentdesk_core::types::pagination::{PageRequest, PageResponse};
use rentdesk_core::types::{TenantId, UserId};
use rentdesk_entity::membership::MemberRole;
use rentdesk_entity::tenant::{CreateTenant, Tenant, TenantSlug};

use super::map_write_error;
use crate::store::{TenantDirectory, TenantStore};

/// Repository for tenants and the context-assembly lookups.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantDirectory for TenantRepository {
    async fn find_tenant_by_slug(&self, slug: &TenantSlug) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE lower(slug) = lower($1)")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find tenant by slug", e)
            })
    }

    async fn find_membership(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> AppResult<Option<MemberRole>> {
        sqlx::query_scalar::<_, MemberRole>(
            "SELECT role FROM team_memberships WHERE tenant_id = $1 AND user_id = $2",
        )
        .bind(tenant_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find membership", e))
    }

    async fn is_owner(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM tenants WHERE id = $1 AND owner_id = $2)",
        )
        .bind(tenant_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check ownership", e))
    }
}

#[async_trait]
impl TenantStore for TenantRepository {
    async fn create_tenant(&self, data: &CreateTenant) -> AppResult<Tenant> {
        sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (id, slug, name, owner_id) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(TenantId::new())
        .bind(&data.slug)
        .bind(&data.name)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "Failed to create tenant",
                &format!("Slug '{}' is already taken", data.slug),
            )
        })
    }

    async fn list_tenants(&self, page: &PageRequest) -> AppResult<PageResponse<Tenant>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tenants")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tenants", e))?;

        let tenants = sqlx::query_as::<_, Tenant>(
            "SELECT * FROM tenants ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tenants", e))?;

        Ok(PageResponse::new(
            tenants,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn disable_tenant(&self, id: TenantId) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET disabled_at = COALESCE(disabled_at, NOW()) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to disable tenant", e))
    }
}
