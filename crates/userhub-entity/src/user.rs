//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Default number of records returned by a list query when no limit
/// is supplied.
const DEFAULT_LIST_LIMIT: i64 = 10;

/// A user record as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier, assigned by the store on creation.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// When the user was created. Set once, never mutated.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated. Absent until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new user.
///
/// Carries no store-assigned fields; `id` and `created_at` are set by
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Data for a partial update of an existing user.
///
/// Fields left `None` keep the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

/// Parameters for list queries, passed through verbatim to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersParams {
    /// Maximum number of records to return.
    pub limit: Option<i64>,
    /// Number of records to skip.
    pub offset: Option<i64>,
}

impl ListUsersParams {
    /// The SQL `LIMIT` value, defaulting when no limit was supplied.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}
