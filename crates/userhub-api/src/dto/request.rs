//! Request DTOs.
//!
//! Each DTO has an explicit conversion into its entity counterpart;
//! field mapping is spelled out rather than derived so the compiler
//! checks every entity pair.

use serde::{Deserialize, Serialize};

use userhub_entity::user::{CreateUser, ListUsersParams, UpdateUser};

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl CreateUserRequest {
    /// Convert into the entity create input.
    pub fn into_create(self) -> CreateUser {
        CreateUser {
            name: self.name,
            email: self.email,
        }
    }
}

/// Body of `PUT /users/{id}`. Absent fields leave the stored value
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    /// Convert into the entity update input.
    pub fn into_update(self) -> UpdateUser {
        UpdateUser {
            name: self.name,
            email: self.email,
        }
    }
}

/// Query parameters of `GET /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersQuery {
    /// Maximum number of records to return (default 10 when absent).
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of records to skip.
    #[serde(default)]
    pub offset: Option<i64>,
}

impl ListUsersQuery {
    /// Convert into the entity list parameters, passed through verbatim.
    pub fn into_params(self) -> ListUsersParams {
        ListUsersParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}
