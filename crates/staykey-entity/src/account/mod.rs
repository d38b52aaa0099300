//! Account domain entities.

pub mod model;
pub mod role;

pub use model::{Account, AccountUpdate, CreatedVia, Credentials, ExternalIdentity, NewAccount};
pub use role::Role;
