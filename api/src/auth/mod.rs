//! Account registration and credential checks.
//!
//! The HTTP layer owns the session cookie itself; this module only supplies
//! the user records to bind into it. All uniqueness checks query the
//! repository directly with the values passed in — no ambient request state.

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::User;
use crate::{ServiceError, ServiceResult};

/// Create a new account. Validates field shapes and username/email
/// uniqueness before touching storage.
pub async fn register(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password: &str,
) -> ServiceResult<User> {
    let username = username.trim();
    let email = email.trim().to_lowercase();

    let name_len = username.chars().count();
    if name_len < 3 || name_len > 64 {
        return Err(ServiceError::validation(
            "Username must be between 3 and 64 characters",
        ));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServiceError::validation("Invalid email address"));
    }
    if password.chars().count() < 6 {
        return Err(ServiceError::validation(
            "Password must be at least 6 characters",
        ));
    }

    let taken: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    if taken.is_some() {
        return Err(ServiceError::validation("This username is already taken"));
    }

    let taken: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if taken.is_some() {
        return Err(ServiceError::validation(
            "This email is already registered",
        ));
    }

    let password_hash =
        hash_password(password).map_err(|e| ServiceError::Validation(e.to_string()))?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (username, email, password_hash, created_at)
         VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(username)
    .bind(&email)
    .bind(&password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Check credentials for login. The identifier matches a username or an
/// email exactly; unknown accounts and wrong passwords produce the same
/// generic failure.
pub async fn authenticate(
    pool: &SqlitePool,
    identifier: &str,
    password: &str,
) -> ServiceResult<User> {
    let invalid = || ServiceError::validation("Invalid username or password");

    let user = User::by_username_or_email(pool, identifier.trim())
        .await?
        .ok_or_else(invalid)?;

    // A malformed stored hash reads as a failed login rather than leaking
    // anything about the account.
    let valid = verify_password(password, &user.password_hash).unwrap_or(false);
    if !valid {
        return Err(invalid());
    }

    Ok(user)
}
