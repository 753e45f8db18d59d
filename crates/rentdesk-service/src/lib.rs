//! # rentdesk-service
//!
//! Business logic service layer for RentDesk. Each service takes the
//! request's [`TenantContext`](rentdesk_auth::TenantContext) explicitly,
//! asks the authorization guard first, and only then reads or writes
//! through the tenant-scoped stores.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod application;
pub mod context;
pub mod onboarding;
pub mod platform;
pub mod property;
pub mod team;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use rentdesk_auth::{AuthorizationGuard, TenantContextBuilder};
use rentdesk_core::config::TenancyConfig;
use rentdesk_database::Stores;

pub use application::ApplicationService;
pub use onboarding::OnboardingService;
pub use platform::PlatformService;
pub use property::PropertyService;
pub use team::TeamService;

/// Every service, wired against one set of stores.
#[derive(Debug, Clone)]
pub struct Services {
    /// Team management.
    pub team: Arc<TeamService>,
    /// Properties.
    pub properties: Arc<PropertyService>,
    /// Rental applications.
    pub applications: Arc<ApplicationService>,
    /// Landlord onboarding.
    pub onboarding: Arc<OnboardingService>,
    /// Platform administration.
    pub platform: Arc<PlatformService>,
}

impl Services {
    /// Wire all services.
    pub fn new(
        stores: &Stores,
        contexts: Arc<TenantContextBuilder>,
        tenancy: &TenancyConfig,
    ) -> Self {
        let guard = AuthorizationGuard::new();
        Self {
            team: Arc::new(TeamService::new(stores.team.clone(), guard)),
            properties: Arc::new(PropertyService::new(stores.properties.clone(), guard)),
            applications: Arc::new(ApplicationService::new(stores.applications.clone(), guard)),
            onboarding: Arc::new(OnboardingService::new(
                stores.tenants.clone(),
                tenancy.reserved_slugs.clone(),
                guard,
            )),
            platform: Arc::new(PlatformService::new(
                stores.tenants.clone(),
                stores.properties.clone(),
                contexts,
                guard,
            )),
        }
    }
}
