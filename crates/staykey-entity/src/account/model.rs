//! Account entity model and the ephemeral request records around it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// How an account originally entered the system. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatedVia {
    /// Created with a local email + password.
    Local,
    /// Created on first sight of a federated identity.
    Federated,
}

/// A registered account in the StayKey system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Stable numeric identifier. Assigned exactly once, never reused.
    pub id: i64,
    /// Email address (unique across all accounts, case-sensitive as stored).
    pub email: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Date of birth (optional).
    pub birth_date: Option<NaiveDate>,
    /// Argon2 password hash. Always a structurally valid hash; accounts
    /// created via federation carry an unusable random placeholder until
    /// a local password is set.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    /// How the account was created.
    pub created_via: CreatedVia,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Ephemeral login credentials. Never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Plaintext password, consumed at login time only.
    pub password: String,
}

/// A verified external identity supplied by the upstream federation step.
///
/// This core trusts it completely; no independent verification of the
/// provider's assertion happens here.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalIdentity {
    /// Email asserted by the external provider.
    pub email: String,
    /// Display name asserted by the external provider.
    pub display_name: String,
}

/// Data required to create a new account locally.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    /// Email address (unique).
    pub email: String,
    /// Initial plaintext password.
    pub password: String,
    /// Display name.
    pub display_name: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Date of birth (optional).
    pub birth_date: Option<NaiveDate>,
    /// Caller-supplied id. When absent a random id is allocated.
    pub requested_id: Option<i64>,
}

/// Data for updating an existing account's mutable fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountUpdate {
    /// New display name.
    pub display_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New date of birth.
    pub birth_date: Option<NaiveDate>,
    /// New plaintext password. Ignored when blank.
    pub password: Option<String>,
}
