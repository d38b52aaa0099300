//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use rand::RngExt;
use rand::distr::Alphanumeric;

use staykey_core::error::AppError;

use super::value::PasswordValue;

/// Length of the random material backing an unusable placeholder hash.
const UNUSABLE_SECRET_LEN: usize = 32;

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct CredentialHasher;

impl CredentialHasher {
    /// Creates a new credential hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Resolves a tagged password value to a stored hash, hashing only
    /// when the value is still plaintext. Re-saving an already-hashed
    /// value is a no-op.
    pub fn ensure_hashed(&self, value: PasswordValue) -> Result<String, AppError> {
        match value {
            PasswordValue::Plaintext(plain) => self.hash(&plain),
            PasswordValue::Hashed(hash) => Ok(hash),
        }
    }

    /// Produces a structurally valid hash of fresh random material.
    ///
    /// The plaintext behind it is discarded, so the resulting hash can
    /// never be matched by any credential. Federated accounts carry this
    /// placeholder until a local password is set.
    pub fn unusable_hash(&self) -> Result<String, AppError> {
        let secret: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(UNUSABLE_SECRET_LEN)
            .map(char::from)
            .collect();
        self.hash(&secret)
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("correct horse battery").unwrap();
        assert!(hasher.verify("correct horse battery", &hash).unwrap());
        assert!(!hasher.verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = CredentialHasher::new();
        let a = hasher.hash("same input").unwrap();
        let b = hasher.hash("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn ensure_hashed_is_idempotent_for_hashes() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("pw").unwrap();
        let kept = hasher
            .ensure_hashed(PasswordValue::Hashed(hash.clone()))
            .unwrap();
        assert_eq!(kept, hash);
    }

    #[test]
    fn ensure_hashed_hashes_plaintext() {
        let hasher = CredentialHasher::new();
        let stored = hasher
            .ensure_hashed(PasswordValue::Plaintext("pw".into()))
            .unwrap();
        assert!(stored.starts_with("$argon2"));
        assert!(hasher.verify("pw", &stored).unwrap());
    }

    #[test]
    fn unusable_hash_is_valid_but_unmatchable() {
        let hasher = CredentialHasher::new();
        let hash = hasher.unusable_hash().unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hasher.verify("", &hash).unwrap());
        assert!(!hasher.verify("password", &hash).unwrap());
    }
}
