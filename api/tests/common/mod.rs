//! Shared fixtures: an in-memory database and quick user/note setup.

#![allow(dead_code)]

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use api::models::User;
use api::notes::{self, NoteDraft};

/// In-memory database with the full schema. A single connection keeps the
/// in-memory store alive for the whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    api::db::init_schema(&pool).await.unwrap();
    pool
}

/// Insert a user directly, skipping the slow Argon2 hashing. The stored
/// hash is junk; tests that exercise login go through `auth::register`.
pub async fn user(pool: &SqlitePool, username: &str) -> User {
    sqlx::query_as(
        "INSERT INTO users (username, email, password_hash, created_at)
         VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind("not-a-real-hash")
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn draft(title: &str, content: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        notebook_id: None,
        tags: None,
    }
}

pub async fn note(pool: &SqlitePool, author: &User, title: &str) -> i64 {
    notes::create_note(pool, author, draft(title, "some content"))
        .await
        .unwrap()
        .note
        .id
}
