//! Account lifecycle operations.

pub mod lifecycle;

pub use lifecycle::UserLifecycleManager;
