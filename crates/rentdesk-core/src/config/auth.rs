//! Session token configuration.

use serde::{Deserialize, Serialize};

/// Settings for the signed session tokens issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC-SHA256 secret used to verify session tokens.
    #[serde(default = "default_session_secret")]
    pub session_secret: String,
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Lifetime of tokens minted by the CLI, in minutes.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: u64,
    /// Clock skew tolerance when validating expiry, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: default_session_secret(),
            session_cookie: default_session_cookie(),
            session_ttl_minutes: default_session_ttl(),
            leeway_seconds: default_leeway(),
        }
    }
}

fn default_session_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_session_cookie() -> String {
    "session".to_string()
}

fn default_session_ttl() -> u64 {
    60
}

fn default_leeway() -> u64 {
    5
}
