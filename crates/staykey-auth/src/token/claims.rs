//! Claims embedded in every session token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use staykey_entity::account::Role;

/// Claims payload embedded in a session token.
///
/// A token is a bearer credential: possession implies authorization for
/// the embedded account id until expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account id.
    pub sub: i64,
    /// Account email.
    pub email: String,
    /// Account role at the time of issuance.
    pub role: Role,
    /// Display name for convenience.
    pub name: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token id.
    pub jti: Uuid,
}

impl Claims {
    /// Returns the account id from the subject claim.
    pub fn account_id(&self) -> i64 {
        self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
