//! # userhub-api
//!
//! HTTP API layer for UserHub built on Axum.
//!
//! Provides the user CRUD endpoints, request-body validation, the fixed
//! `{code, message}` error body, request logging middleware, and the
//! server lifecycle (signal-driven bounded graceful shutdown).

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use router::build_router;
pub use state::AppState;
