//! Response DTOs.

use serde::{Deserialize, Serialize};

use rentdesk_auth::TenantContext;
use rentdesk_core::types::{TenantId, UserId};
use rentdesk_entity::identity::SessionRole;
use rentdesk_entity::membership::MemberRole;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Readiness check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall status.
    pub status: String,
    /// `connected`, `unavailable`, or `in-memory`.
    pub database: String,
}

/// The tenant served at the requested host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantResponse {
    /// Tenant ID.
    pub id: TenantId,
    /// Subdomain label.
    pub slug: String,
    /// Display name.
    pub name: String,
}

/// The caller as seen from the requested host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// Session user, if any.
    pub user_id: Option<UserId>,
    /// Session role.
    pub role: SessionRole,
    /// Tenant slug, absent on the root domain.
    pub tenant: Option<String>,
    /// Whether the caller owns the tenant.
    pub is_owner: bool,
    /// The caller's team role, if any.
    pub membership: Option<MemberRole>,
}

impl From<&TenantContext> for WhoAmIResponse {
    fn from(ctx: &TenantContext) -> Self {
        let relationship = ctx.relationship();
        Self {
            user_id: ctx.user_id(),
            role: ctx.role(),
            tenant: ctx.tenant().map(|t| t.slug.to_string()),
            is_owner: relationship.is_owner,
            membership: relationship.membership,
        }
    }
}
