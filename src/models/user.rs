use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents a user account as stored in the database.
///
/// Only the bcrypt hash of the password is ever persisted; the hash is also
/// excluded from serialization so it can never appear in a response body.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
    pub mobile_number: String,
}
