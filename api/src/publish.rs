//! Public-slug publication.
//!
//! A note gets its slug the first time it is published and keeps it for
//! life; unpublishing only flips the visibility flag, so republishing
//! restores the same public URL.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::access;
use crate::markdown;
use crate::models::{Note, User};
use crate::{ServiceError, ServiceResult};

/// Publication state after a publish/unpublish call. `changed` is false when
/// the call was an idempotent no-op.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationState {
    pub is_public: bool,
    pub public_slug: Option<String>,
    pub changed: bool,
}

/// A published note as seen by an anonymous reader.
#[derive(Debug, Clone, Serialize)]
pub struct PublicNote {
    pub title: String,
    pub html: String,
    pub updated_at: DateTime<Utc>,
}

/// Draw slug candidates until one doesn't collide with a stored slug.
/// 128 bits of randomness per draw, so the loop terminates immediately in
/// practice.
async fn fresh_slug(pool: &SqlitePool) -> Result<String, sqlx::Error> {
    loop {
        let candidate = Uuid::new_v4().simple().to_string();
        let taken: Option<(i64,)> = sqlx::query_as("SELECT id FROM notes WHERE public_slug = ?")
            .bind(&candidate)
            .fetch_optional(pool)
            .await?;
        if taken.is_none() {
            return Ok(candidate);
        }
    }
}

pub async fn publish_note(
    pool: &SqlitePool,
    actor: &User,
    note_id: i64,
) -> ServiceResult<PublicationState> {
    let note = access::authored_note(pool, note_id, actor.id).await?;

    if note.is_public {
        return Ok(PublicationState {
            is_public: true,
            public_slug: note.public_slug,
            changed: false,
        });
    }

    // Generate a slug only on first publication; afterwards it is stable.
    let slug = match note.public_slug {
        Some(slug) => slug,
        None => fresh_slug(pool).await?,
    };

    sqlx::query("UPDATE notes SET is_public = 1, public_slug = ?, updated_at = ? WHERE id = ?")
        .bind(&slug)
        .bind(Utc::now())
        .bind(note.id)
        .execute(pool)
        .await?;

    Ok(PublicationState {
        is_public: true,
        public_slug: Some(slug),
        changed: true,
    })
}

pub async fn unpublish_note(
    pool: &SqlitePool,
    actor: &User,
    note_id: i64,
) -> ServiceResult<PublicationState> {
    let note = access::authored_note(pool, note_id, actor.id).await?;

    if !note.is_public {
        return Ok(PublicationState {
            is_public: false,
            public_slug: note.public_slug,
            changed: false,
        });
    }

    sqlx::query("UPDATE notes SET is_public = 0, updated_at = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(note.id)
        .execute(pool)
        .await?;

    Ok(PublicationState {
        is_public: false,
        public_slug: note.public_slug,
        changed: true,
    })
}

/// Anonymous read of a published note by slug. Everything else — unknown
/// slug, unpublished note — is a plain NotFound.
pub async fn public_note(pool: &SqlitePool, slug: &str) -> ServiceResult<PublicNote> {
    let note = Note::by_public_slug(pool, slug)
        .await?
        .ok_or(ServiceError::NotFound)?;
    Ok(PublicNote {
        html: markdown::render(&note.content),
        title: note.title,
        updated_at: note.updated_at,
    })
}
