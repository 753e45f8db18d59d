//! Session identity value object.

use serde::{Deserialize, Serialize};

use rentdesk_core::types::UserId;

use super::role::SessionRole;

/// Who is making the request, as reported by the session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// The authenticated user, or `None` for anonymous requests.
    pub user_id: Option<UserId>,
    /// The role tag attached to the session.
    pub role: SessionRole,
}

impl SessionIdentity {
    /// The identity used when no session is present.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            role: SessionRole::Anonymous,
        }
    }

    /// An authenticated identity.
    pub fn user(user_id: UserId, role: SessionRole) -> Self {
        Self {
            user_id: Some(user_id),
            role,
        }
    }

    /// Whether a user id is attached.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::anonymous()
    }
}
