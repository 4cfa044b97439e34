//! Wire DTOs.

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};
pub use response::{HealthResponse, UserResponse};
