//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use rentdesk_core::config::AuthConfig;
use rentdesk_core::error::AppError;
use rentdesk_entity::identity::SessionIdentity;

use super::claims::SessionClaims;

/// Validates session tokens and turns them into request identities.
#[derive(Clone)]
pub struct SessionDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for SessionDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AppError> {
        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Session has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthenticated("Invalid session token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid session token signature")
                    }
                    _ => AppError::unauthenticated(format!("Session validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Resolves the identity of a request.
    ///
    /// A missing, malformed, expired, or forged token yields the anonymous
    /// identity; the request proceeds without a user.
    pub fn identify(&self, token: Option<&str>) -> SessionIdentity {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return SessionIdentity::anonymous();
        };

        match self.decode(token) {
            Ok(claims) => claims.identity(),
            Err(err) => {
                tracing::debug!(error = %err, "Ignoring unusable session token");
                SessionIdentity::anonymous()
            }
        }
    }
}
