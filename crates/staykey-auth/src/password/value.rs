//! Tagged password values at the boundary where passwords enter the system.
//!
//! Carrying the plaintext/hashed distinction in the type removes any need
//! to sniff a stored value before re-saving an account record.

use serde::{Deserialize, Serialize};

/// A password value that knows whether it has been hashed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum PasswordValue {
    /// A raw password as supplied by a caller. Must be hashed before storage.
    Plaintext(String),
    /// An Argon2 PHC string already produced by [`super::CredentialHasher`].
    Hashed(String),
}

impl PasswordValue {
    /// Classify an untagged string coming back from the store boundary.
    ///
    /// Stored values are always hashes in our scheme; anything not carrying
    /// the PHC marker is treated as plaintext that still needs hashing.
    pub fn from_stored(value: impl Into<String>) -> Self {
        let value = value.into();
        if is_phc_hash(&value) {
            Self::Hashed(value)
        } else {
            Self::Plaintext(value)
        }
    }

    /// Whether this value is already hashed.
    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }

    /// Borrow the inner string regardless of state.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plaintext(s) | Self::Hashed(s) => s,
        }
    }
}

/// Whether a string carries the Argon2 PHC scheme marker.
pub fn is_phc_hash(value: &str) -> bool {
    value.starts_with("$argon2")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_phc_strings_as_hashed() {
        let v = PasswordValue::from_stored("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA");
        assert!(v.is_hashed());
    }

    #[test]
    fn classifies_raw_strings_as_plaintext() {
        let v = PasswordValue::from_stored("hunter2");
        assert!(!v.is_hashed());
        assert_eq!(v.as_str(), "hunter2");
    }
}
