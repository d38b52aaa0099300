//! # staykey-core
//!
//! Core crate for the StayKey identity and access platform. Contains the
//! configuration schemas, the unified error system, and the convenience
//! result alias.
//!
//! This crate has **no** internal dependencies on other StayKey crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
