//! Properties of the context tenant.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use rentdesk_auth::{AuthorizationGuard, Capability, TenantContext};
use rentdesk_core::error::AppError;
use rentdesk_core::types::PropertyId;
use rentdesk_core::types::pagination::{PageRequest, PageResponse};
use rentdesk_database::store::PropertyStore;
use rentdesk_entity::property::{NewProperty, Property};

use crate::context::{acting_user, context_tenant, require_text};

/// Lists and manages the context tenant's properties.
#[derive(Clone)]
pub struct PropertyService {
    /// Property store.
    properties: Arc<dyn PropertyStore>,
    /// Authorization guard.
    guard: AuthorizationGuard,
}

impl std::fmt::Debug for PropertyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyService").finish_non_exhaustive()
    }
}

/// Request to create a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePropertyRequest {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
}

impl PropertyService {
    /// Creates a new property service.
    pub fn new(properties: Arc<dyn PropertyStore>, guard: AuthorizationGuard) -> Self {
        Self { properties, guard }
    }

    /// Lists the tenant's properties, newest first.
    pub async fn list(
        &self,
        ctx: &TenantContext,
        page: PageRequest,
    ) -> Result<PageResponse<Property>, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard
            .require(ctx, &Capability::TenantMember(tenant.id))?;

        self.properties.list_properties(tenant.id, &page).await
    }

    /// Gets one property of the tenant.
    pub async fn get(&self, ctx: &TenantContext, id: PropertyId) -> Result<Property, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard
            .require(ctx, &Capability::TenantMember(tenant.id))?;

        self.properties
            .find_property(tenant.id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Property not found"))
    }

    /// Creates a property. Requires an admin.
    pub async fn create(
        &self,
        ctx: &TenantContext,
        req: CreatePropertyRequest,
    ) -> Result<Property, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::TenantAdmin(tenant.id))?;
        require_text("Property name", &req.name)?;
        require_text("Property address", &req.address)?;

        let actor = acting_user(ctx)?;
        let property = self
            .properties
            .create_property(
                tenant.id,
                &NewProperty {
                    name: req.name.trim().to_string(),
                    address: req.address.trim().to_string(),
                    created_by: actor,
                },
            )
            .await?;

        info!(
            actor_id = %actor,
            tenant_id = %tenant.id,
            property_id = %property.id,
            "Property created"
        );

        Ok(property)
    }

    /// Deletes a property and its applications. Requires an admin.
    pub async fn delete(&self, ctx: &TenantContext, id: PropertyId) -> Result<(), AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::TenantAdmin(tenant.id))?;

        if !self.properties.delete_property(tenant.id, id).await? {
            return Err(AppError::not_found("Property not found"));
        }

        info!(
            actor_id = ?ctx.user_id(),
            tenant_id = %tenant.id,
            property_id = %id,
            "Property deleted"
        );

        Ok(())
    }
}
