//! Platform administration: the only unscoped reads in the system.

use std::sync::Arc;

use tracing::info;

use rentdesk_auth::{AuthorizationGuard, Capability, TenantContext, TenantContextBuilder};
use rentdesk_core::error::AppError;
use rentdesk_core::types::TenantId;
use rentdesk_core::types::pagination::{PageRequest, PageResponse};
use rentdesk_database::store::{PropertyStore, TenantStore};
use rentdesk_entity::property::Property;
use rentdesk_entity::tenant::Tenant;

/// Super-admin operations across every tenant.
#[derive(Clone)]
pub struct PlatformService {
    /// Tenant store.
    tenants: Arc<dyn TenantStore>,
    /// Property store.
    properties: Arc<dyn PropertyStore>,
    /// Context builder, for slug cache invalidation.
    contexts: Arc<TenantContextBuilder>,
    /// Authorization guard.
    guard: AuthorizationGuard,
}

impl std::fmt::Debug for PlatformService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformService").finish_non_exhaustive()
    }
}

impl PlatformService {
    /// Creates a new platform service.
    pub fn new(
        tenants: Arc<dyn TenantStore>,
        properties: Arc<dyn PropertyStore>,
        contexts: Arc<TenantContextBuilder>,
        guard: AuthorizationGuard,
    ) -> Self {
        Self {
            tenants,
            properties,
            contexts,
            guard,
        }
    }

    /// Lists every tenant, including disabled ones.
    pub async fn list_tenants(
        &self,
        ctx: &TenantContext,
        page: PageRequest,
    ) -> Result<PageResponse<Tenant>, AppError> {
        self.guard.require(ctx, &Capability::SuperAdminOnly)?;
        self.tenants.list_tenants(&page).await
    }

    /// Disables a tenant. Its subdomain stops resolving immediately.
    pub async fn disable_tenant(
        &self,
        ctx: &TenantContext,
        id: TenantId,
    ) -> Result<Tenant, AppError> {
        self.guard.require(ctx, &Capability::SuperAdminOnly)?;

        let tenant = self
            .tenants
            .disable_tenant(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tenant not found"))?;
        self.contexts.invalidate(&tenant.slug).await;

        info!(
            admin_id = ?ctx.user_id(),
            tenant_id = %tenant.id,
            slug = %tenant.slug,
            "Tenant disabled"
        );

        Ok(tenant)
    }

    /// Lists properties of every tenant.
    pub async fn list_all_properties(
        &self,
        ctx: &TenantContext,
        page: PageRequest,
    ) -> Result<PageResponse<Property>, AppError> {
        self.guard.require(ctx, &Capability::SuperAdminOnly)?;
        self.properties.list_all_properties(&page).await
    }
}
