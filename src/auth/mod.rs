pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Represents the payload for a user login request.
///
/// No shape constraints beyond deserialization: any submitted pair is a
/// credential attempt, and a pair that matches no stored account is an
/// authentication failure (401), not a malformed request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username of the account to authenticate.
    pub username: String,
    /// User's password.
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username for the new account.
    /// Must be between 3 and 50 characters, alphanumeric, and can include underscores or hyphens.
    #[validate(
        length(min = 3, max = 50),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account. Required, non-empty.
    #[validate(length(min = 1))]
    pub password: String,
    /// Contact number for the new account.
    #[validate(length(min = 1, max = 20))]
    pub mobile_number: String,
}

/// Response structure after a successful login.
/// Contains the signed JWT the client presents as a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The JWT (JSON Web Token) for authenticating subsequent requests.
    pub token: String,
}
