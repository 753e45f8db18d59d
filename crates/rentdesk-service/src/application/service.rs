//! Rental applications: renters apply, landlords decide.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use rentdesk_auth::{AuthorizationGuard, Capability, TenantContext};
use rentdesk_core::error::AppError;
use rentdesk_core::types::{ApplicationId, PropertyId};
use rentdesk_database::store::ApplicationStore;
use rentdesk_entity::application::{ApplicationStatus, NewApplication, RentalApplication};
use rentdesk_entity::identity::SessionRole;

use crate::context::{acting_user, context_tenant};

/// Handles rental applications for the context tenant.
#[derive(Clone)]
pub struct ApplicationService {
    /// Application store.
    applications: Arc<dyn ApplicationStore>,
    /// Authorization guard.
    guard: AuthorizationGuard,
}

impl std::fmt::Debug for ApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationService").finish_non_exhaustive()
    }
}

/// Request to apply for a property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitApplicationRequest {
    /// Optional note to the landlord.
    pub message: Option<String>,
}

/// A landlord's decision on an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// `approved` or `rejected`.
    pub status: ApplicationStatus,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(applications: Arc<dyn ApplicationStore>, guard: AuthorizationGuard) -> Self {
        Self {
            applications,
            guard,
        }
    }

    /// Applies for one of the tenant's properties. Renters only.
    pub async fn submit(
        &self,
        ctx: &TenantContext,
        property_id: PropertyId,
        req: SubmitApplicationRequest,
    ) -> Result<RentalApplication, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::AuthenticatedOnly)?;
        if ctx.role() != SessionRole::Tenant {
            return Err(AppError::forbidden("Only renters can apply for a property"));
        }

        let applicant = acting_user(ctx)?;
        let message = req
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let application = self
            .applications
            .create_application(
                tenant.id,
                &NewApplication {
                    property_id,
                    applicant_id: applicant,
                    message,
                },
            )
            .await?;

        info!(
            applicant_id = %applicant,
            tenant_id = %tenant.id,
            property_id = %property_id,
            application_id = %application.id,
            "Rental application submitted"
        );

        Ok(application)
    }

    /// Lists the caller's own applications with this tenant.
    pub async fn list_mine(&self, ctx: &TenantContext) -> Result<Vec<RentalApplication>, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::AuthenticatedOnly)?;
        let applicant = acting_user(ctx)?;

        self.applications
            .list_for_applicant(tenant.id, applicant)
            .await
    }

    /// Gets an application. Visible to its applicant and to the tenant's
    /// team; to anyone else it does not exist.
    pub async fn get(
        &self,
        ctx: &TenantContext,
        id: ApplicationId,
    ) -> Result<RentalApplication, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::AuthenticatedOnly)?;

        let application = self
            .applications
            .find_application(tenant.id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))?;

        self.guard.require_any(
            ctx,
            &[
                Capability::TenantMember(tenant.id),
                Capability::ResourceOwner(application.applicant_id),
            ],
        )?;

        Ok(application)
    }

    /// Approves or rejects a pending application. Requires an admin.
    pub async fn decide(
        &self,
        ctx: &TenantContext,
        id: ApplicationId,
        req: DecisionRequest,
    ) -> Result<RentalApplication, AppError> {
        let tenant = context_tenant(ctx)?;
        self.guard.require(ctx, &Capability::TenantAdmin(tenant.id))?;

        if !req.status.is_decided() {
            return Err(AppError::validation(
                "Decision must be either 'approved' or 'rejected'",
            ));
        }

        let Some(application) = self
            .applications
            .decide_application(tenant.id, id, req.status)
            .await?
        else {
            // Either unknown, or decided first by someone else.
            let current = self
                .applications
                .find_application(tenant.id, id)
                .await?
                .ok_or_else(|| AppError::not_found("Application not found"))?;
            return Err(AppError::conflict(format!(
                "Application has already been {}",
                current.status
            )));
        };

        info!(
            actor_id = ?ctx.user_id(),
            tenant_id = %tenant.id,
            application_id = %id,
            status = %application.status,
            "Rental application decided"
        );

        Ok(application)
    }
}
