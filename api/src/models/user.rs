//! # User model
//!
//! Two representations of an account:
//!
//! - [`User`] — the complete `users` row, including the Argon2 PHC
//!   `password_hash`. Loaded with [`sqlx::FromRow`]; never serialised.
//! - [`UserInfo`] — the client-safe projection returned by the HTTP layer.
//!   [`User::to_info`] produces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    pub async fn by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact-match lookup by username or email, for login.
    pub async fn by_username_or_email(
        pool: &SqlitePool,
        identifier: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE username = ? OR email = ?")
            .bind(identifier)
            .bind(identifier)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive exact username lookup, used when sharing a note.
    pub async fn by_username_ci(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE LOWER(username) = LOWER(?)")
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
}
