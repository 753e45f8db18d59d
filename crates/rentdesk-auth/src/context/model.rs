//! The immutable tenant context value.

use serde::{Deserialize, Serialize};

use rentdesk_core::types::{TenantId, UserId};
use rentdesk_entity::identity::{SessionIdentity, SessionRole};
use rentdesk_entity::membership::MemberRole;
use rentdesk_entity::tenant::{Tenant, TenantSlug};

/// The landlord a request is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRef {
    /// Tenant id.
    pub id: TenantId,
    /// Subdomain slug.
    pub slug: TenantSlug,
    /// Display name.
    pub name: String,
    /// The landlord-owner.
    pub owner_id: UserId,
}

impl From<&Tenant> for TenantRef {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id,
            slug: tenant.slug.clone(),
            name: tenant.name.clone(),
            owner_id: tenant.owner_id,
        }
    }
}

/// The caller's standing with the context tenant, resolved during assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRelationship {
    /// Whether the caller owns the tenant.
    pub is_owner: bool,
    /// The caller's team role, if any.
    pub membership: Option<MemberRole>,
}

impl TenantRelationship {
    /// No relationship at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// The owner relationship.
    pub fn owner() -> Self {
        Self {
            is_owner: true,
            membership: None,
        }
    }

    /// A team member relationship.
    pub fn member(role: MemberRole) -> Self {
        Self {
            is_owner: false,
            membership: Some(role),
        }
    }

    /// Owner or admin member.
    pub fn is_admin(&self) -> bool {
        self.is_owner || self.membership.is_some_and(|r| r.is_admin())
    }

    /// Owner or any member.
    pub fn is_member(&self) -> bool {
        self.is_owner || self.membership.is_some()
    }
}

/// Everything authorization needs to know about one request.
///
/// Built once per request and never mutated; downstream decisions are pure
/// functions of this value. Serializable for output only: the one way to
/// obtain a context is through its constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantContext {
    tenant: Option<TenantRef>,
    identity: SessionIdentity,
    relationship: TenantRelationship,
}

impl TenantContext {
    /// A context on the root domain, with no tenant.
    pub fn root(identity: SessionIdentity) -> Self {
        Self {
            tenant: None,
            identity,
            relationship: TenantRelationship::none(),
        }
    }

    /// A context addressed to a tenant. An anonymous identity never holds a
    /// relationship, whatever is passed in.
    pub fn for_tenant(
        tenant: TenantRef,
        identity: SessionIdentity,
        relationship: TenantRelationship,
    ) -> Self {
        let relationship = if identity.is_authenticated() {
            relationship
        } else {
            TenantRelationship::none()
        };
        Self {
            tenant: Some(tenant),
            identity,
            relationship,
        }
    }

    /// The tenant, if the request was addressed to one.
    pub fn tenant(&self) -> Option<&TenantRef> {
        self.tenant.as_ref()
    }

    /// The tenant id, if any.
    pub fn tenant_id(&self) -> Option<TenantId> {
        self.tenant.as_ref().map(|t| t.id)
    }

    /// The session identity.
    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// The authenticated user, if any.
    pub fn user_id(&self) -> Option<UserId> {
        self.identity.user_id
    }

    /// The session role.
    pub fn role(&self) -> SessionRole {
        self.identity.role
    }

    /// The caller's relationship with the context tenant.
    pub fn relationship(&self) -> &TenantRelationship {
        &self.relationship
    }

    /// Whether the request was made on the root domain.
    pub fn is_root(&self) -> bool {
        self.tenant.is_none()
    }
}
