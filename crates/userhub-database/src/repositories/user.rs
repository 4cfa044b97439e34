//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use userhub_core::error::{AppError, ErrorKind};
use userhub_core::result::AppResult;
use userhub_core::store::UserStore;
use userhub_entity::user::{CreateUser, ListUsersParams, UpdateUser, User};

/// Repository for user CRUD operations backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at, updated_at",
        )
        .bind(&data.name)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to create user: {e}"), e)
        })
    }

    async fn get(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to fetch user: {e}"), e)
        })?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn list(&self, params: &ListUsersParams) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to list users: {e}"), e)
        })
    }

    async fn update(&self, id: i32, data: &UpdateUser) -> AppResult<User> {
        // COALESCE keeps the stored value for fields absent from the input.
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              email = COALESCE($3, email), \
                              updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id, name, email, created_at, updated_at",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to update user: {e}"), e)
        })?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        // The handler prefixes delete failures; carry only the raw detail here.
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, e.to_string(), e))?;

        Ok(result.rows_affected() > 0)
    }
}
