//! Federated identity linking.

pub mod linker;

pub use linker::IdentityLinker;
