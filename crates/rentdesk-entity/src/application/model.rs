//! Rental application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rentdesk_core::types::{ApplicationId, PropertyId, TenantId, UserId};

use super::status::ApplicationStatus;

/// A renter's application for one of a landlord's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RentalApplication {
    /// Unique application identifier.
    pub id: ApplicationId,
    /// Landlord the property belongs to.
    pub tenant_id: TenantId,
    /// The property applied for.
    pub property_id: PropertyId,
    /// The renter who applied.
    pub applicant_id: UserId,
    /// Free-form note from the applicant.
    pub message: Option<String>,
    /// Current status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
}

/// Data required to submit an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    /// The property applied for.
    pub property_id: PropertyId,
    /// The applying renter.
    pub applicant_id: UserId,
    /// Free-form note.
    pub message: Option<String>,
}
