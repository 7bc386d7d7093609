//! # Note model
//!
//! [`Note`] is the raw `notes` row. Tag names and collaborators are not
//! columns — they live in association tables and are loaded on demand via
//! the query methods here, so there is no lazily-populated relationship
//! field to keep in sync.
//!
//! [`NoteInfo`] (full detail, with tags) and [`NoteSummary`] (list entry)
//! are the serialisable projections the HTTP layer returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::user::UserInfo;

/// Full note record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub notebook_id: Option<i64>,
    pub is_public: bool,
    pub public_slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Convert to NoteInfo for client consumption. Tags are passed in by the
    /// caller, which loads them inside whatever transaction is current.
    pub fn to_info(&self, tags: Vec<String>) -> NoteInfo {
        NoteInfo {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            author_id: self.author_id,
            notebook_id: self.notebook_id,
            tags,
            is_public: self.is_public,
            public_slug: self.public_slug.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn to_summary(&self) -> NoteSummary {
        NoteSummary {
            id: self.id,
            title: self.title.clone(),
            notebook_id: self.notebook_id,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub async fn by_id(pool: &SqlitePool, id: i64) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Published note lookup by slug. Unpublished notes are invisible here
    /// even when the slug matches.
    pub async fn by_public_slug(
        pool: &SqlitePool,
        slug: &str,
    ) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM notes WHERE public_slug = ? AND is_public = 1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Notes the user authored or collaborates on, most recently updated
    /// first.
    pub async fn list_accessible(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as(
            "SELECT * FROM notes
             WHERE author_id = ?
                OR id IN (SELECT note_id FROM note_collaborators WHERE user_id = ?)
             ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Accessible notes bearing the given tag, most recently updated first.
    pub async fn list_accessible_by_tag(
        pool: &SqlitePool,
        user_id: i64,
        tag_id: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as(
            "SELECT n.* FROM notes n
             JOIN note_tags nt ON nt.note_id = n.id
             WHERE nt.tag_id = ?
               AND (n.author_id = ?
                    OR n.id IN (SELECT note_id FROM note_collaborators WHERE user_id = ?))
             ORDER BY n.updated_at DESC",
        )
        .bind(tag_id)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn list_in_notebook(
        pool: &SqlitePool,
        notebook_id: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM notes WHERE notebook_id = ? ORDER BY updated_at DESC")
            .bind(notebook_id)
            .fetch_all(pool)
            .await
    }

    /// Tag names attached to this note, sorted for stable output.
    pub async fn tag_names(&self, pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT t.name FROM tags t
             JOIN note_tags nt ON nt.tag_id = t.id
             WHERE nt.note_id = ?
             ORDER BY t.name",
        )
        .bind(self.id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    pub async fn collaborators(&self, pool: &SqlitePool) -> Result<Vec<UserInfo>, sqlx::Error> {
        let rows: Vec<(i64, String, String)> = sqlx::query_as(
            "SELECT u.id, u.username, u.email FROM users u
             JOIN note_collaborators nc ON nc.user_id = u.id
             WHERE nc.note_id = ?
             ORDER BY u.username",
        )
        .bind(self.id)
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, username, email)| UserInfo {
                id,
                username,
                email,
            })
            .collect())
    }

    pub async fn is_collaborator(
        pool: &SqlitePool,
        note_id: i64,
        user_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM note_collaborators WHERE note_id = ? AND user_id = ?",
        )
        .bind(note_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }
}

/// Full note detail safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteInfo {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub notebook_id: Option<i64>,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub public_slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List entry for note indexes; content and tags omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
    pub notebook_id: Option<i64>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
