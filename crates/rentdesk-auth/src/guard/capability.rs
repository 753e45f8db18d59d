//! Capabilities a caller can be required to hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use rentdesk_core::types::{TenantId, UserId};

/// A required capability, checked against a tenant context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum Capability {
    /// Platform operator only. Tenant context is irrelevant.
    SuperAdminOnly,
    /// Any authenticated user.
    AuthenticatedOnly,
    /// Owner or admin member of the given tenant.
    TenantAdmin(TenantId),
    /// Owner or any member of the given tenant.
    TenantMember(TenantId),
    /// The given user and nobody else.
    ResourceOwner(UserId),
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuperAdminOnly => write!(f, "super-admin"),
            Self::AuthenticatedOnly => write!(f, "authenticated"),
            Self::TenantAdmin(id) => write!(f, "tenant-admin({id})"),
            Self::TenantMember(id) => write!(f, "tenant-member({id})"),
            Self::ResourceOwner(id) => write!(f, "resource-owner({id})"),
        }
    }
}
