//! Rental application repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use rentdesk_core::error::{AppError, ErrorKind};
use rentdesk_core::result::AppResult;
use rentdesk_core::types::{ApplicationId, TenantId, UserId};
use rentdesk_entity::application::{ApplicationStatus, NewApplication, RentalApplication};

use crate::store::ApplicationStore;

/// Repository for `rental_applications`, keyed by `tenant_id`.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for ApplicationRepository {
    async fn create_application(
        &self,
        tenant_id: TenantId,
        data: &NewApplication,
    ) -> AppResult<RentalApplication> {
        // The property must belong to the same tenant; otherwise nothing is inserted.
        sqlx::query_as::<_, RentalApplication>(
            "INSERT INTO rental_applications (id, tenant_id, property_id, applicant_id, message) \
             SELECT $1, p.tenant_id, p.id, $4, $5 FROM properties p \
             WHERE p.tenant_id = $2 AND p.id = $3 \
             RETURNING *",
        )
        .bind(ApplicationId::new())
        .bind(tenant_id)
        .bind(data.property_id)
        .bind(data.applicant_id)
        .bind(&data.message)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create application", e)
        })?
        .ok_or_else(|| AppError::not_found("Property not found"))
    }

    async fn find_application(
        &self,
        tenant_id: TenantId,
        id: ApplicationId,
    ) -> AppResult<Option<RentalApplication>> {
        sqlx::query_as::<_, RentalApplication>(
            "SELECT * FROM rental_applications WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find application", e))
    }

    async fn list_for_applicant(
        &self,
        tenant_id: TenantId,
        applicant_id: UserId,
    ) -> AppResult<Vec<RentalApplication>> {
        sqlx::query_as::<_, RentalApplication>(
            "SELECT * FROM rental_applications WHERE tenant_id = $1 AND applicant_id = $2 \
             ORDER BY created_at DESC",
        )
        .bind(tenant_id)
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list applications", e))
    }

    async fn decide_application(
        &self,
        tenant_id: TenantId,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> AppResult<Option<RentalApplication>> {
        sqlx::query_as::<_, RentalApplication>(
            "UPDATE rental_applications SET status = $3 \
             WHERE tenant_id = $1 AND id = $2 AND status = 'submitted' RETURNING *",
        )
        .bind(tenant_id)
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update application", e)
        })
    }
}
