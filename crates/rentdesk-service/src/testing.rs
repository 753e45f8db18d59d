//! Shared fixtures for service tests.

use std::sync::Arc;

use rentdesk_auth::{TenantContext, TenantContextBuilder};
use rentdesk_core::config::TenancyConfig;
use rentdesk_core::types::UserId;
use rentdesk_database::store::{TeamStore, TenantStore};
use rentdesk_database::{MemoryStore, Stores};
use rentdesk_entity::identity::{SessionIdentity, SessionRole};
use rentdesk_entity::membership::{MemberRole, NewMembership};
use rentdesk_entity::tenant::{CreateTenant, Tenant, TenantSlug};

use crate::Services;

pub(crate) struct Fixture {
    pub stores: Stores,
    pub contexts: Arc<TenantContextBuilder>,
    pub services: Services,
    pub acme: Tenant,
    pub globex: Tenant,
}

impl Fixture {
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let stores = Stores::memory(store.clone());
        let tenancy = TenancyConfig::for_root("rentals.app");
        let contexts = Arc::new(TenantContextBuilder::new(stores.directory.clone(), &tenancy));
        let services = Services::new(&stores, contexts.clone(), &tenancy);

        let acme = tenant(&*store, "acme").await;
        let globex = tenant(&*store, "globex").await;

        Self {
            stores,
            contexts,
            services,
            acme,
            globex,
        }
    }

    /// Add `user` to the tenant's team.
    pub async fn join(&self, tenant: &Tenant, role: MemberRole) -> UserId {
        let user = UserId::new();
        self.stores
            .team
            .add_member(&NewMembership {
                tenant_id: tenant.id,
                user_id: user,
                role,
                invited_by: tenant.owner_id,
            })
            .await
            .expect("add member");
        user
    }

    /// The context `user` would get on `tenant`'s subdomain.
    pub async fn on(&self, tenant: &Tenant, user: UserId, role: SessionRole) -> TenantContext {
        self.contexts
            .build(Some(&tenant.slug), Some(SessionIdentity::user(user, role)))
            .await
            .expect("build context")
    }

    /// The owner's context on their own tenant.
    pub async fn owner_of(&self, tenant: &Tenant) -> TenantContext {
        self.on(tenant, tenant.owner_id, SessionRole::LandlordOwner)
            .await
    }

    /// An anonymous visitor on `tenant`'s subdomain.
    pub async fn visitor(&self, tenant: &Tenant) -> TenantContext {
        self.contexts
            .build(Some(&tenant.slug), None)
            .await
            .expect("build context")
    }
}

/// A context on the root domain.
pub(crate) fn root(user: UserId, role: SessionRole) -> TenantContext {
    TenantContext::root(SessionIdentity::user(user, role))
}

async fn tenant(store: &dyn TenantStore, slug: &str) -> Tenant {
    store
        .create_tenant(&CreateTenant {
            slug: TenantSlug::new(slug),
            name: slug.to_uppercase(),
            owner_id: UserId::new(),
        })
        .await
        .expect("create tenant")
}
