//! Guard outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentdesk_core::error::AppError;

use super::capability::Capability;

/// Why a capability was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DenialReason {
    /// No user is attached to the request.
    Unauthenticated,
    /// The user lacks the required relationship with the tenant.
    NotTenantMember,
    /// The user is authenticated but the role or identity does not match.
    Forbidden,
}

impl DenialReason {
    /// Stable reason code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Unauthenticated",
            Self::NotTenantMember => "NotTenantMember",
            Self::Forbidden => "Forbidden",
        }
    }
}

/// The result of one capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationDecision {
    /// Whether the capability is held.
    pub allowed: bool,
    /// Set on denial.
    pub reason: Option<DenialReason>,
}

impl AuthorizationDecision {
    /// An allowing decision.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// A denying decision.
    pub fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }

    /// Whether the capability is held.
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Convert into a boundary error.
    ///
    /// `NotTenantMember` becomes "not found" so that nothing about the
    /// tenant's resources is confirmed to an outsider.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.reason {
            _ if self.allowed => Ok(()),
            Some(DenialReason::Unauthenticated) => {
                Err(AppError::unauthenticated("Authentication required"))
            }
            Some(DenialReason::NotTenantMember) => Err(AppError::not_found("Resource not found")),
            Some(DenialReason::Forbidden) | None => Err(AppError::forbidden("Access denied")),
        }
    }
}

/// A capability that cannot be evaluated against the context it was given.
///
/// This is a caller defect, not a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("capability '{capability}' requires a tenant but the context has none")]
pub struct MalformedRequest {
    /// The offending capability.
    pub capability: Capability,
}

impl From<MalformedRequest> for AppError {
    fn from(err: MalformedRequest) -> Self {
        AppError::with_source(
            rentdesk_core::error::ErrorKind::Internal,
            "Internal server error",
            err,
        )
    }
}
