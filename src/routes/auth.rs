use crate::{
    auth::{generate_token, hash_password, verify_password, LoginRequest, RegisterRequest, TokenResponse},
    error::AppError,
    repositories::UserRepository,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account. The password is stored as a bcrypt hash; the
/// raw secret is never persisted or logged. Duplicate usernames or emails are
/// rejected by the unique indexes on the `users` table, so two concurrent
/// registrations cannot both succeed.
#[post("/register")]
pub async fn register(
    users: web::Data<UserRepository>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    log::info!("Registering user '{}'", register_data.username);

    // Validate input
    register_data.validate()?;

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user; a unique-index violation means the username or email
    // is already taken.
    let user_id = users
        .create_user(
            &register_data.username,
            &password_hash,
            &register_data.email,
            &register_data.mobile_number,
        )
        .await
        .map_err(|e| match e {
            AppError::Conflict(_) => {
                log::warn!(
                    "Registration rejected for '{}': username or email already exists",
                    register_data.username
                );
                AppError::Conflict("Username or email already exists".into())
            }
            other => other,
        })?;

    log::info!(
        "Registered user '{}' with id {}",
        register_data.username,
        user_id
    );

    Ok(HttpResponse::Ok().json(json!({
        "message": "User registered successfully"
    })))
}

/// Login user
///
/// Verifies the submitted credentials against the user store and returns a
/// signed, time-boxed token on success. Every well-formed pair is treated as
/// a credential attempt; anything that fails the lookup or hash check is a
/// 401, never a validation error.
#[post("/login")]
pub async fn login(
    users: web::Data<UserRepository>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    log::info!("Login attempt for '{}'", login_data.username);

    // Get user from database
    let user = users.find_by_username(&login_data.username).await?;

    match user {
        Some(user) => {
            // Verify password
            if verify_password(&login_data.password, &user.password_hash)? {
                let token = generate_token(&user.username)?;
                log::info!("Issued token for '{}'", user.username);
                Ok(HttpResponse::Ok().json(TokenResponse { token }))
            } else {
                log::warn!("Invalid password for '{}'", login_data.username);
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => {
            log::warn!("Login attempt for unknown user '{}'", login_data.username);
            Err(AppError::Unauthorized("Invalid credentials".into()))
        }
    }
}
