//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use userhub_core::config::AppConfig;
use userhub_core::store::UserStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The user record store.
    pub users: Arc<dyn UserStore>,
}
