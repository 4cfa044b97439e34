//! # userhub-database
//!
//! PostgreSQL connection management and the concrete [`UserRepository`]
//! implementing the `UserStore` boundary.
//!
//! [`UserRepository`]: repositories::user::UserRepository

pub mod connection;
pub mod repositories;
