//! In-memory implementation of every store trait.
//!
//! Mirrors the PostgreSQL repositories' scoping and conflict semantics so
//! that services and the HTTP layer can be exercised without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use rentdesk_core::error::AppError;
use rentdesk_core::result::AppResult;
use rentdesk_core::types::pagination::{PageRequest, PageResponse};
use rentdesk_core::types::{ApplicationId, MembershipId, PropertyId, TenantId, UserId};
use rentdesk_entity::application::{ApplicationStatus, NewApplication, RentalApplication};
use rentdesk_entity::membership::{MemberRole, NewMembership, TeamMembership};
use rentdesk_entity::property::{NewProperty, Property};
use rentdesk_entity::tenant::{CreateTenant, Tenant, TenantSlug};

use crate::store::{ApplicationStore, PropertyStore, TeamStore, TenantDirectory, TenantStore};

#[derive(Debug, Default)]
struct State {
    tenants: HashMap<TenantId, Tenant>,
    memberships: Vec<TeamMembership>,
    properties: Vec<Property>,
    applications: Vec<RentalApplication>,
}

/// A process-local store guarded by a single async lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T: Clone + serde::Serialize>(items: &[T], page: &PageRequest) -> PageResponse<T> {
    let total = items.len() as u64;
    let slice = items
        .iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .cloned()
        .collect();
    PageResponse::new(slice, page.page, page.page_size, total)
}

#[async_trait]
impl TenantDirectory for MemoryStore {
    async fn find_tenant_by_slug(&self, slug: &TenantSlug) -> AppResult<Option<Tenant>> {
        let state = self.state.read().await;
        Ok(state.tenants.values().find(|t| &t.slug == slug).cloned())
    }

    async fn find_membership(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> AppResult<Option<MemberRole>> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .iter()
            .find(|m| m.tenant_id == tenant_id && m.user_id == user_id)
            .map(|m| m.role))
    }

    async fn is_owner(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .tenants
            .get(&tenant_id)
            .is_some_and(|t| t.owner_id == user_id))
    }
}

#[async_trait]
impl TenantStore for MemoryStore {
    async fn create_tenant(&self, data: &CreateTenant) -> AppResult<Tenant> {
        let mut state = self.state.write().await;
        if state.tenants.values().any(|t| t.slug == data.slug) {
            return Err(AppError::conflict(format!(
                "Slug '{}' is already taken",
                data.slug
            )));
        }
        let tenant = Tenant {
            id: TenantId::new(),
            slug: data.slug.clone(),
            name: data.name.clone(),
            owner_id: data.owner_id,
            disabled_at: None,
            created_at: Utc::now(),
        };
        state.tenants.insert(tenant.id, tenant.clone());
        Ok(tenant)
    }

    async fn list_tenants(&self, page: &PageRequest) -> AppResult<PageResponse<Tenant>> {
        let state = self.state.read().await;
        let mut tenants: Vec<Tenant> = state.tenants.values().cloned().collect();
        tenants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(&tenants, page))
    }

    async fn disable_tenant(&self, id: TenantId) -> AppResult<Option<Tenant>> {
        let mut state = self.state.write().await;
        Ok(state.tenants.get_mut(&id).map(|t| {
            t.disabled_at.get_or_insert_with(Utc::now);
            t.clone()
        }))
    }
}

#[async_trait]
impl TeamStore for MemoryStore {
    async fn list_members(&self, tenant_id: TenantId) -> AppResult<Vec<TeamMembership>> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .iter()
            .filter(|m| m.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn add_member(&self, data: &NewMembership) -> AppResult<TeamMembership> {
        let mut state = self.state.write().await;
        if state
            .memberships
            .iter()
            .any(|m| m.tenant_id == data.tenant_id && m.user_id == data.user_id)
        {
            return Err(AppError::conflict("User is already a member of this team"));
        }
        let membership = TeamMembership {
            id: MembershipId::new(),
            tenant_id: data.tenant_id,
            user_id: data.user_id,
            role: data.role,
            invited_by: Some(data.invited_by),
            created_at: Utc::now(),
        };
        state.memberships.push(membership.clone());
        Ok(membership)
    }

    async fn update_member_role(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        role: MemberRole,
    ) -> AppResult<Option<TeamMembership>> {
        let mut state = self.state.write().await;
        Ok(state
            .memberships
            .iter_mut()
            .find(|m| m.tenant_id == tenant_id && m.user_id == user_id)
            .map(|m| {
                m.role = role;
                m.clone()
            }))
    }

    async fn remove_member(&self, tenant_id: TenantId, user_id: UserId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let before = state.memberships.len();
        state
            .memberships
            .retain(|m| !(m.tenant_id == tenant_id && m.user_id == user_id));
        Ok(state.memberships.len() < before)
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn list_properties(
        &self,
        tenant_id: TenantId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Property>> {
        let state = self.state.read().await;
        let items: Vec<Property> = state
            .properties
            .iter()
            .rev()
            .filter(|p| p.tenant_id == tenant_id)
            .cloned()
            .collect();
        Ok(paginate(&items, page))
    }

    async fn find_property(
        &self,
        tenant_id: TenantId,
        id: PropertyId,
    ) -> AppResult<Option<Property>> {
        let state = self.state.read().await;
        Ok(state
            .properties
            .iter()
            .find(|p| p.tenant_id == tenant_id && p.id == id)
            .cloned())
    }

    async fn create_property(
        &self,
        tenant_id: TenantId,
        data: &NewProperty,
    ) -> AppResult<Property> {
        let mut state = self.state.write().await;
        let property = Property {
            id: PropertyId::new(),
            tenant_id,
            name: data.name.clone(),
            address: data.address.clone(),
            created_by: data.created_by,
            created_at: Utc::now(),
        };
        state.properties.push(property.clone());
        Ok(property)
    }

    async fn delete_property(&self, tenant_id: TenantId, id: PropertyId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let before = state.properties.len();
        state
            .properties
            .retain(|p| !(p.tenant_id == tenant_id && p.id == id));
        let deleted = state.properties.len() < before;
        if deleted {
            state
                .applications
                .retain(|a| !(a.tenant_id == tenant_id && a.property_id == id));
        }
        Ok(deleted)
    }

    async fn list_all_properties(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let state = self.state.read().await;
        let items: Vec<Property> = state.properties.iter().rev().cloned().collect();
        Ok(paginate(&items, page))
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn create_application(
        &self,
        tenant_id: TenantId,
        data: &NewApplication,
    ) -> AppResult<RentalApplication> {
        let mut state = self.state.write().await;
        if !state
            .properties
            .iter()
            .any(|p| p.tenant_id == tenant_id && p.id == data.property_id)
        {
            return Err(AppError::not_found("Property not found"));
        }
        let application = RentalApplication {
            id: ApplicationId::new(),
            tenant_id,
            property_id: data.property_id,
            applicant_id: data.applicant_id,
            message: data.message.clone(),
            status: ApplicationStatus::Submitted,
            created_at: Utc::now(),
        };
        state.applications.push(application.clone());
        Ok(application)
    }

    async fn find_application(
        &self,
        tenant_id: TenantId,
        id: ApplicationId,
    ) -> AppResult<Option<RentalApplication>> {
        let state = self.state.read().await;
        Ok(state
            .applications
            .iter()
            .find(|a| a.tenant_id == tenant_id && a.id == id)
            .cloned())
    }

    async fn list_for_applicant(
        &self,
        tenant_id: TenantId,
        applicant_id: UserId,
    ) -> AppResult<Vec<RentalApplication>> {
        let state = self.state.read().await;
        Ok(state
            .applications
            .iter()
            .rev()
            .filter(|a| a.tenant_id == tenant_id && a.applicant_id == applicant_id)
            .cloned()
            .collect())
    }

    async fn decide_application(
        &self,
        tenant_id: TenantId,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> AppResult<Option<RentalApplication>> {
        let mut state = self.state.write().await;
        Ok(state
            .applications
            .iter_mut()
            .find(|a| a.tenant_id == tenant_id && a.id == id && !a.status.is_decided())
            .map(|a| {
                a.status = status;
                a.clone()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentdesk_core::error::ErrorKind;

    async fn tenant(store: &MemoryStore, slug: &str) -> Tenant {
        store
            .create_tenant(&CreateTenant {
                slug: TenantSlug::new(slug),
                name: slug.to_string(),
                owner_id: UserId::new(),
            })
            .await
            .expect("create tenant")
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts_case_insensitively() {
        let store = MemoryStore::new();
        tenant(&store, "acme").await;
        let err = store
            .create_tenant(&CreateTenant {
                slug: TenantSlug::new("ACME"),
                name: "Other".to_string(),
                owner_id: UserId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_properties_are_scoped_to_their_tenant() {
        let store = MemoryStore::new();
        let acme = tenant(&store, "acme").await;
        let globex = tenant(&store, "globex").await;

        let property = store
            .create_property(
                acme.id,
                &NewProperty {
                    name: "Elm St".to_string(),
                    address: "1 Elm St".to_string(),
                    created_by: acme.owner_id,
                },
            )
            .await
            .unwrap();

        assert!(
            store
                .find_property(globex.id, property.id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(!store.delete_property(globex.id, property.id).await.unwrap());
        assert_eq!(
            store
                .list_properties(globex.id, &PageRequest::default())
                .await
                .unwrap()
                .total_items,
            0
        );
        assert!(
            store
                .find_property(acme.id, property.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_one_membership_per_tenant() {
        let store = MemoryStore::new();
        let acme = tenant(&store, "acme").await;
        let user = UserId::new();
        let data = NewMembership {
            tenant_id: acme.id,
            user_id: user,
            role: MemberRole::Member,
            invited_by: acme.owner_id,
        };
        store.add_member(&data).await.unwrap();
        let err = store.add_member(&data).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(
            store.find_membership(acme.id, user).await.unwrap(),
            Some(MemberRole::Member)
        );
    }

    #[tokio::test]
    async fn test_application_requires_property_in_same_tenant() {
        let store = MemoryStore::new();
        let acme = tenant(&store, "acme").await;
        let globex = tenant(&store, "globex").await;
        let property = store
            .create_property(
                acme.id,
                &NewProperty {
                    name: "Elm St".to_string(),
                    address: "1 Elm St".to_string(),
                    created_by: acme.owner_id,
                },
            )
            .await
            .unwrap();

        let err = store
            .create_application(
                globex.id,
                &NewApplication {
                    property_id: property.id,
                    applicant_id: UserId::new(),
                    message: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_disable_is_idempotent() {
        let store = MemoryStore::new();
        let acme = tenant(&store, "acme").await;
        let first = store.disable_tenant(acme.id).await.unwrap().unwrap();
        let second = store.disable_tenant(acme.id).await.unwrap().unwrap();
        assert_eq!(first.disabled_at, second.disabled_at);
        assert!(!second.is_active());
    }

    #[tokio::test]
    async fn test_decided_application_is_not_decided_again() {
        let store = MemoryStore::new();
        let acme = tenant(&store, "acme").await;
        let property = store
            .create_property(
                acme.id,
                &NewProperty {
                    name: "Elm St".to_string(),
                    address: "1 Elm St".to_string(),
                    created_by: acme.owner_id,
                },
            )
            .await
            .unwrap();
        let application = store
            .create_application(
                acme.id,
                &NewApplication {
                    property_id: property.id,
                    applicant_id: UserId::new(),
                    message: None,
                },
            )
            .await
            .unwrap();

        let approved = store
            .decide_application(acme.id, application.id, ApplicationStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.map(|a| a.status), Some(ApplicationStatus::Approved));

        assert!(
            store
                .decide_application(acme.id, application.id, ApplicationStatus::Rejected)
                .await
                .unwrap()
                .is_none()
        );
        let stored = store
            .find_application(acme.id, application.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ApplicationStatus::Approved);
    }
}
