//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to StayKey accounts.
///
/// `Client` is the default role assigned at creation; `Host` can list and
/// manage properties; `Admin` can manage any account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full system administrator.
    Admin,
    /// Property owner; can manage own listings.
    Host,
    /// Regular guest account. Default for new accounts.
    Client,
}

impl Role {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Host => "host",
            Self::Client => "client",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Client
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = staykey_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "host" => Ok(Self::Host),
            "client" => Ok(Self::Client),
            _ => Err(staykey_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, host, client"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("CLIENT".parse::<Role>().unwrap(), Role::Client);
        assert!("invalid".parse::<Role>().is_err());
    }

    #[test]
    fn test_default_is_client() {
        assert_eq!(Role::default(), Role::Client);
    }
}
