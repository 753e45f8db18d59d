//! Property repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use rentdesk_core::error::{AppError, ErrorKind};
use rentdesk_core::result::AppResult;
use rentdesk_core::types::pagination::{PageRequest, PageResponse};
use rentdesk_core::types::{PropertyId, TenantId};
use rentdesk_entity::property::{NewProperty, Property};

use crate::store::PropertyStore;

/// Repository for `properties`. All reads and writes except
/// `list_all_properties` filter on `tenant_id`.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyStore for PropertyRepository {
    async fn list_properties(
        &self,
        tenant_id: TenantId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Property>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count properties", e)
            })?;

        let items = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE tenant_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(tenant_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list properties", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    async fn find_property(
        &self,
        tenant_id: TenantId,
        id: PropertyId,
    ) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find property", e))
    }

    async fn create_property(
        &self,
        tenant_id: TenantId,
        data: &NewProperty,
    ) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "INSERT INTO properties (id, tenant_id, name, address, created_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(PropertyId::new())
        .bind(tenant_id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create property", e))
    }

    async fn delete_property(&self, tenant_id: TenantId, id: PropertyId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete property", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all_properties(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count properties", e)
            })?;

        let items = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list properties", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }
}
