//! Session token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentdesk_core::types::UserId;
use rentdesk_entity::identity::{SessionIdentity, SessionRole};

/// Claims payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// Role tag assigned by the identity provider.
    pub role: SessionRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.sub)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// The request identity these claims describe.
    ///
    /// A token explicitly tagged `anonymous` never carries a user.
    pub fn identity(&self) -> SessionIdentity {
        match self.role {
            SessionRole::Anonymous => SessionIdentity::anonymous(),
            role => SessionIdentity::user(self.user_id(), role),
        }
    }
}
