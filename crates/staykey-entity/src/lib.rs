//! # staykey-entity
//!
//! Domain entity models for StayKey. Every struct in this crate represents
//! a stored account row or an ephemeral domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod account;

pub use account::{Account, AccountUpdate, CreatedVia, Credentials, ExternalIdentity, NewAccount, Role};
