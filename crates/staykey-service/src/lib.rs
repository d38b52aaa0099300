//! # staykey-service
//!
//! Account lifecycle orchestration for StayKey. Composes the persistence
//! collaborator, credential hasher, token service, and authorization
//! policy into the operations the rest of the platform calls.
//!
//! ## Modules
//!
//! - `store` — the `UserStore` collaborator trait and a single-node in-memory implementation
//! - `ids` — bounded random account-id allocation
//! - `federation` — linking verified external identities to local accounts
//! - `user` — create/login/update/delete/assign-role orchestration

pub mod federation;
pub mod ids;
pub mod store;
pub mod user;

pub use federation::IdentityLinker;
pub use store::{MemoryUserStore, UserStore};
pub use user::UserLifecycleManager;
