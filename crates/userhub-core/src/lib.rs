//! # userhub-core
//!
//! Core crate for UserHub. Contains configuration schemas, the store
//! trait boundary, and the unified error system.
//!
//! This crate has **no** internal dependencies on other UserHub crates
//! apart from the entity models.

pub mod config;
pub mod error;
pub mod result;
pub mod store;

pub use error::AppError;
pub use result::AppResult;
pub use store::UserStore;
