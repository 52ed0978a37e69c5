//!
//! # User Repository
//!
//! Mediates access to the `users` table so the auth routes never touch SQL
//! directly. Username and email uniqueness is enforced by unique indexes in
//! the schema; a violated index surfaces here as `AppError::Conflict` via the
//! `From<sqlx::Error>` conversion, so there is no read-then-write race window.

use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user record and returns its assigned identifier.
    ///
    /// `password_hash` must already be a bcrypt hash; this layer never sees
    /// the raw secret.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        email: &str,
        mobile_number: &str,
    ) -> Result<i32, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (username, password_hash, email, mobile_number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .bind(mobile_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Looks up a user by username, returning `None` if no such account exists.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, email, mobile_number \
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
