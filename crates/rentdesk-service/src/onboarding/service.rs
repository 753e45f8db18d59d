//! Landlord onboarding: claim a subdomain on the root domain.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use rentdesk_auth::{AuthorizationGuard, Capability, TenantContext, validate_slug};
use rentdesk_core::error::AppError;
use rentdesk_database::store::TenantStore;
use rentdesk_entity::identity::SessionRole;
use rentdesk_entity::tenant::{CreateTenant, Tenant, TenantSlug};

use crate::context::{acting_user, require_text};

/// Creates new tenants.
#[derive(Clone)]
pub struct OnboardingService {
    /// Tenant store.
    tenants: Arc<dyn TenantStore>,
    /// Labels that may not be claimed.
    reserved_slugs: Vec<String>,
    /// Authorization guard.
    guard: AuthorizationGuard,
}

impl std::fmt::Debug for OnboardingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingService")
            .field("reserved_slugs", &self.reserved_slugs)
            .finish_non_exhaustive()
    }
}

/// Request to onboard a landlord.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenantRequest {
    /// Desired subdomain label.
    pub slug: String,
    /// Business display name.
    pub name: String,
}

impl OnboardingService {
    /// Creates a new onboarding service.
    pub fn new(
        tenants: Arc<dyn TenantStore>,
        reserved_slugs: Vec<String>,
        guard: AuthorizationGuard,
    ) -> Self {
        Self {
            tenants,
            reserved_slugs,
            guard,
        }
    }

    /// Creates a tenant owned by the calling landlord.
    ///
    /// Only available on the root domain and only to landlord-owner
    /// sessions. The slug is case-folded before validation.
    pub async fn create_tenant(
        &self,
        ctx: &TenantContext,
        req: CreateTenantRequest,
    ) -> Result<Tenant, AppError> {
        if !ctx.is_root() {
            return Err(AppError::not_found(
                "Onboarding is only available on the root domain",
            ));
        }
        self.guard.require(ctx, &Capability::AuthenticatedOnly)?;
        if ctx.role() != SessionRole::LandlordOwner {
            return Err(AppError::forbidden("Only landlords can create a tenant"));
        }

        let slug = TenantSlug::new(req.slug.trim());
        validate_slug(slug.as_str(), &self.reserved_slugs)?;
        require_text("Tenant name", &req.name)?;

        let owner = acting_user(ctx)?;
        let tenant = self
            .tenants
            .create_tenant(&CreateTenant {
                slug,
                name: req.name.trim().to_string(),
                owner_id: owner,
            })
            .await?;

        info!(
            owner_id = %owner,
            tenant_id = %tenant.id,
            slug = %tenant.slug,
            "Tenant onboarded"
        );

        Ok(tenant)
    }
}
