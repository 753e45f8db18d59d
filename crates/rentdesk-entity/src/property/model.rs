//! Property entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rentdesk_core::types::{PropertyId, TenantId, UserId};

/// A rentable property owned by exactly one landlord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique property identifier.
    pub id: PropertyId,
    /// Owning landlord.
    pub tenant_id: TenantId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Team member who created the listing.
    pub created_by: UserId,
    /// When the property was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Acting user.
    pub created_by: UserId,
}
