//! Store traits: the scoped data accessor seen by the rest of the workspace.
//!
//! Every method that reads or writes a tenant-owned row takes the owning
//! [`TenantId`] and must never return or touch rows belonging to another
//! tenant. A row that exists under a different tenant is reported exactly
//! like a missing row. The only unscoped reads are the platform listings
//! (`list_tenants`, `list_all_properties`), which callers gate behind the
//! super-admin capability.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use rentdesk_core::result::AppResult;
use rentdesk_core::types::pagination::{PageRequest, PageResponse};
use rentdesk_core::types::{ApplicationId, PropertyId, TenantId, UserId};
use rentdesk_entity::application::{ApplicationStatus, NewApplication, RentalApplication};
use rentdesk_entity::membership::{MemberRole, NewMembership, TeamMembership};
use rentdesk_entity::property::{NewProperty, Property};
use rentdesk_entity::tenant::{CreateTenant, Tenant, TenantSlug};

use crate::memory::MemoryStore;
use crate::repositories::{
    ApplicationRepository, MembershipRepository, PropertyRepository, TenantRepository,
};

/// Lookups needed to assemble a request's tenant context.
#[async_trait]
pub trait TenantDirectory: Send + Sync + 'static {
    /// Find a tenant by its (case-insensitive) slug, including disabled tenants.
    async fn find_tenant_by_slug(&self, slug: &TenantSlug) -> AppResult<Option<Tenant>>;

    /// Return the user's team role on the tenant, if any.
    async fn find_membership(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> AppResult<Option<MemberRole>>;

    /// Whether the user owns the tenant.
    async fn is_owner(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool>;
}

/// Tenant lifecycle: onboarding and platform administration.
#[async_trait]
pub trait TenantStore: Send + Sync + 'static {
    /// Create a tenant. Fails with `Conflict` if the slug is taken.
    async fn create_tenant(&self, data: &CreateTenant) -> AppResult<Tenant>;

    /// List all tenants, newest first.
    async fn list_tenants(&self, page: &PageRequest) -> AppResult<PageResponse<Tenant>>;

    /// Soft-disable a tenant. Returns the updated row, or `None` if unknown.
    async fn disable_tenant(&self, id: TenantId) -> AppResult<Option<Tenant>>;
}

/// Team memberships of one tenant.
#[async_trait]
pub trait TeamStore: Send + Sync + 'static {
    /// List the tenant's members, oldest first.
    async fn list_members(&self, tenant_id: TenantId) -> AppResult<Vec<TeamMembership>>;

    /// Add a member. Fails with `Conflict` if the user is already a member.
    async fn add_member(&self, data: &NewMembership) -> AppResult<TeamMembership>;

    /// Change a member's role. Returns `None` if the user is not a member.
    async fn update_member_role(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        role: MemberRole,
    ) -> AppResult<Option<TeamMembership>>;

    /// Remove a member. Returns `true` if a row was deleted.
    async fn remove_member(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool>;
}

/// Properties of one tenant.
#[async_trait]
pub trait PropertyStore: Send + Sync + 'static {
    /// List the tenant's properties, newest first.
    async fn list_properties(
        &self,
        tenant_id: TenantId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Property>>;

    /// Find a property belonging to the tenant.
    async fn find_property(
        &self,
        tenant_id: TenantId,
        id: PropertyId,
    ) -> AppResult<Option<Property>>;

    /// Create a property owned by the tenant.
    async fn create_property(&self, tenant_id: TenantId, data: &NewProperty)
    -> AppResult<Property>;

    /// Delete a property belonging to the tenant. Returns `true` if deleted.
    async fn delete_property(&self, tenant_id: TenantId, id: PropertyId) -> AppResult<bool>;

    /// List properties across every tenant. Platform administration only.
    async fn list_all_properties(&self, page: &PageRequest) -> AppResult<PageResponse<Property>>;
}

/// Rental applications of one tenant.
#[async_trait]
pub trait ApplicationStore: Send + Sync + 'static {
    /// Record a new application under the tenant.
    async fn create_application(
        &self,
        tenant_id: TenantId,
        data: &NewApplication,
    ) -> AppResult<RentalApplication>;

    /// Find an application belonging to the tenant.
    async fn find_application(
        &self,
        tenant_id: TenantId,
        id: ApplicationId,
    ) -> AppResult<Option<RentalApplication>>;

    /// List one applicant's applications with the tenant, newest first.
    async fn list_for_applicant(
        &self,
        tenant_id: TenantId,
        applicant_id: UserId,
    ) -> AppResult<Vec<RentalApplication>>;

    /// Record a decision on a submitted application belonging to the tenant.
    /// Returns `None` if the application is unknown or already decided.
    async fn decide_application(
        &self,
        tenant_id: TenantId,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> AppResult<Option<RentalApplication>>;
}

/// The full set of stores, shared by services and the HTTP state.
#[derive(Clone)]
pub struct Stores {
    /// Context-assembly lookups.
    pub directory: Arc<dyn TenantDirectory>,
    /// Tenant lifecycle.
    pub tenants: Arc<dyn TenantStore>,
    /// Team memberships.
    pub team: Arc<dyn TeamStore>,
    /// Properties.
    pub properties: Arc<dyn PropertyStore>,
    /// Rental applications.
    pub applications: Arc<dyn ApplicationStore>,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        let tenants = Arc::new(TenantRepository::new(pool.clone()));
        Self {
            directory: tenants.clone(),
            tenants,
            team: Arc::new(MembershipRepository::new(pool.clone())),
            properties: Arc::new(PropertyRepository::new(pool.clone())),
            applications: Arc::new(ApplicationRepository::new(pool)),
        }
    }

    /// Stores backed by a single shared in-memory store.
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            directory: store.clone(),
            tenants: store.clone(),
            team: store.clone(),
            properties: store.clone(),
            applications: store,
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
