//! The record store boundary.

use async_trait::async_trait;

use userhub_entity::user::{CreateUser, ListUsersParams, UpdateUser, User};

use crate::result::AppResult;

/// The persistence abstraction providing CRUD operations over users.
///
/// The HTTP layer only ever talks to the store through this trait, so the
/// concrete backend (PostgreSQL in production, in-memory in tests) stays
/// swappable behind an `Arc<dyn UserStore>`.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert a new user and return the created record.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Fetch a user by primary key. A missing row is an error.
    async fn get(&self, id: i32) -> AppResult<User>;

    /// List users honoring the limit/offset parameters.
    async fn list(&self, params: &ListUsersParams) -> AppResult<Vec<User>>;

    /// Apply a partial update and return the updated record.
    /// Fields left `None` keep their stored value.
    async fn update(&self, id: i32, data: &UpdateUser) -> AppResult<User>;

    /// Delete a user by primary key. Returns `false` when no row matched.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}
