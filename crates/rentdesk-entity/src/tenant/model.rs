//! Tenant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rentdesk_core::types::{TenantId, UserId};

use super::slug::TenantSlug;

/// A landlord account reachable at `{slug}.{root_domain}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: TenantId,
    /// Globally unique, case-insensitive subdomain label.
    pub slug: TenantSlug,
    /// Display name of the landlord business.
    pub name: String,
    /// The landlord-owner who onboarded this tenant.
    pub owner_id: UserId,
    /// Set when the platform disables the tenant. Tenants are never deleted.
    pub disabled_at: Option<DateTime<Utc>>,
    /// When the tenant was created.
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Whether the tenant is currently serving requests.
    pub fn is_active(&self) -> bool {
        self.disabled_at.is_none()
    }
}

/// Data required to onboard a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    /// Desired subdomain label (already validated).
    pub slug: TenantSlug,
    /// Display name.
    pub name: String,
    /// The onboarding landlord.
    pub owner_id: UserId,
}
