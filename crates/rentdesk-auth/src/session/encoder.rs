//! Session token creation, used by development tooling and tests.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use rentdesk_core::config::AuthConfig;
use rentdesk_core::error::AppError;
use rentdesk_core::types::UserId;
use rentdesk_entity::identity::SessionRole;

use super::claims::SessionClaims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct SessionEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for SessionEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}

/// A freshly minted session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedSession {
    /// The signed token.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl SessionEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            ttl_minutes: config.session_ttl_minutes as i64,
        }
    }

    /// Issues a token for the user with the configured TTL.
    pub fn issue(&self, user_id: UserId, role: SessionRole) -> Result<IssuedSession, AppError> {
        self.issue_with_ttl(user_id, role, Duration::minutes(self.ttl_minutes))
    }

    /// Issues a token with an explicit TTL. A negative TTL yields an
    /// already-expired token.
    pub fn issue_with_ttl(
        &self,
        user_id: UserId,
        role: SessionRole,
        ttl: Duration,
    ) -> Result<IssuedSession, AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = SessionClaims {
            sub: user_id.into_uuid(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedSession { token, expires_at })
    }
}
