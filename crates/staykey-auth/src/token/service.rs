//! Session token issuance and verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use staykey_core::config::auth::AuthConfig;
use staykey_core::error::AppError;
use staykey_entity::account::Account;

use super::claims::Claims;

/// An issued session token together with its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionToken {
    /// The compact signed token string.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies signed, stateless session tokens.
///
/// The signing key comes from process-wide configuration, loaded once at
/// startup; rotation is out of scope. Verification is pure — there is no
/// server-side revocation list, so a valid token stays valid until expiry.
#[derive(Clone)]
pub struct TokenService {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("validation", &self.validation)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a signed session token for the given account.
    pub fn issue(&self, account: &Account) -> Result<SessionToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: account.id,
            email: account.email.clone(),
            role: account.role,
            name: account.display_name.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(SessionToken { token, expires_at })
    }

    /// Decodes and validates a session token string.
    ///
    /// Pure and side-effect-free. Fails with `TokenExpired` past expiry,
    /// `TokenInvalid` on a signature mismatch, and `TokenMalformed` when
    /// the claims cannot be parsed.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::new(
                        staykey_core::ErrorKind::TokenExpired,
                        "Token has expired",
                    ),
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::new(
                        staykey_core::ErrorKind::TokenInvalid,
                        "Invalid token signature",
                    ),
                    _ => AppError::new(
                        staykey_core::ErrorKind::TokenMalformed,
                        format!("Token could not be parsed: {e}"),
                    ),
                }
            })?;

        Ok(token_data.claims)
    }
}
