//! # staykey-auth
//!
//! Credential verification, stateless session tokens, and authorization
//! rules for the StayKey identity core.
//!
//! ## Modules
//!
//! - `password` — Argon2id credential hashing and the tagged plaintext/hash boundary type
//! - `token` — signed session token issuance and verification
//! - `policy` — pure self-or-admin authorization decisions

pub mod password;
pub mod policy;
pub mod token;

pub use password::{CredentialHasher, PasswordValue};
pub use policy::AuthorizationPolicy;
pub use token::{Claims, SessionToken, TokenService};
