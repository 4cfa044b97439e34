//! User CRUD handlers.
//!
//! Each handler is the outcome mapper for one operation: it is total over
//! the store's result space and always produces exactly one response
//! variant with its status code pinned. Store error text goes into the
//! response message verbatim.
//!
//! Get maps every store failure to 404 while Delete distinguishes
//! not-found from other failures. The asymmetry is part of the wire
//! contract and is kept on purpose.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::dto::request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};
use crate::dto::response::UserResponse;
use crate::error::ErrorBody;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// GET /users
///
/// 200 + array (possibly empty), or 500 with the store's error text.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Response {
    match state.users.list(&query.into_params()).await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(e) => ErrorBody::internal(e.message).into_response(),
    }
}

/// POST /users
///
/// 400 on a rejected body (handled by [`JsonBody`]), 500 on store
/// failure, 201 + created record on success.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Response {
    match state.users.create(&body.into_create()).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(user))).into_response(),
        Err(e) => ErrorBody::internal(e.message).into_response(),
    }
}

/// GET /users/{id}
///
/// Any store failure surfaces as 404 with the store's error text.
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.users.get(id).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => ErrorBody::not_found(e.message).into_response(),
    }
}

/// PUT /users/{id}
///
/// 400 on a rejected body, 500 on any store failure, 200 + updated
/// record on success.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Response {
    match state.users.update(id, &body.into_update()).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(e) => ErrorBody::internal(e.message).into_response(),
    }
}

/// DELETE /users/{id}
///
/// 204 with an empty body on success. Zero rows affected is the
/// not-found condition: 404 with the fixed message `User not found`.
/// Any other store failure is 500 with a `Failed to delete user: `
/// prefix on the detail.
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.users.delete(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => ErrorBody::not_found("User not found").into_response(),
        Err(e) => {
            ErrorBody::internal(format!("Failed to delete user: {}", e.message)).into_response()
        }
    }
}
