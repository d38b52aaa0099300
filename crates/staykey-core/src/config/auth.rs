//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
///
/// The signing secret is loaded once at startup and is never rotated
/// mid-process; disposable secrets can be injected in tests by building
/// this struct directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Maximum random draws when allocating a fresh account id before
    /// giving up with an exhaustion error.
    #[serde(default = "default_id_attempts")]
    pub id_allocation_attempts: u32,
}

impl AuthConfig {
    /// Build a config with the given signing secret and all other
    /// fields at their defaults.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Self::default()
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            id_allocation_attempts: default_id_attempts(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_id_attempts() -> u32 {
    16
}
