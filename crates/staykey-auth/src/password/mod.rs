//! Credential hashing.

pub mod hasher;
pub mod value;

pub use hasher::CredentialHasher;
pub use value::PasswordValue;
