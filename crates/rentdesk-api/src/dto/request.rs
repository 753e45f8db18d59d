//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use rentdesk_core::types::UserId;
use rentdesk_entity::application::ApplicationStatus;
use rentdesk_entity::membership::MemberRole;
use rentdesk_service::application::{DecisionRequest, SubmitApplicationRequest};
use rentdesk_service::onboarding::CreateTenantRequest;
use rentdesk_service::property::CreatePropertyRequest;
use rentdesk_service::team::{AddMemberRequest, ChangeRoleRequest};

/// Add a team member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddMemberBody {
    /// User to add.
    pub user_id: UserId,
    /// Their role.
    pub role: MemberRole,
}

impl From<AddMemberBody> for AddMemberRequest {
    fn from(body: AddMemberBody) -> Self {
        Self {
            user_id: body.user_id,
            role: body.role,
        }
    }
}

/// Change a team member's role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeRoleBody {
    /// New role.
    pub role: MemberRole,
}

impl From<ChangeRoleBody> for ChangeRoleRequest {
    fn from(body: ChangeRoleBody) -> Self {
        Self { role: body.role }
    }
}

/// Create a property.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePropertyBody {
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    /// Street address.
    #[validate(length(min = 1, max = 500, message = "Address must be 1-500 characters"))]
    pub address: String,
}

impl From<CreatePropertyBody> for CreatePropertyRequest {
    fn from(body: CreatePropertyBody) -> Self {
        Self {
            name: body.name,
            address: body.address,
        }
    }
}

/// Apply for a property.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitApplicationBody {
    /// Note to the landlord.
    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

impl From<SubmitApplicationBody> for SubmitApplicationRequest {
    fn from(body: SubmitApplicationBody) -> Self {
        Self {
            message: body.message,
        }
    }
}

/// Decide an application.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DecisionBody {
    /// `approved` or `rejected`.
    pub status: ApplicationStatus,
}

impl From<DecisionBody> for DecisionRequest {
    fn from(body: DecisionBody) -> Self {
        Self {
            status: body.status,
        }
    }
}

/// Claim a subdomain.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTenantBody {
    /// Subdomain label.
    #[validate(length(min = 3, max = 63))]
    pub slug: String,
    /// Display name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

impl From<CreateTenantBody> for CreateTenantRequest {
    fn from(body: CreateTenantBody) -> Self {
        Self {
            slug: body.slug,
            name: body.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_body_limits() {
        let body = CreatePropertyBody {
            name: String::new(),
            address: "1 Main St".to_string(),
        };
        assert!(body.validate().is_err());

        let body = CreatePropertyBody {
            name: "Maple Court".to_string(),
            address: "x".repeat(501),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_tenant_body_limits() {
        let body = CreateTenantBody {
            slug: "ab".to_string(),
            name: "Acme".to_string(),
        };
        assert!(body.validate().is_err());

        let body = CreateTenantBody {
            slug: "acme".to_string(),
            name: "Acme".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_empty_application_body_is_valid() {
        assert!(SubmitApplicationBody::default().validate().is_ok());
        let body: SubmitApplicationBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
