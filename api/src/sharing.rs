//! Collaborator management.
//!
//! Author-only operations. The collaborator set never includes the author;
//! that is enforced here at entry, not by the schema.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::access;
use crate::models::{Note, User, UserInfo};
use crate::{ServiceError, ServiceResult};

/// Result of an unshare request. Removing a user who wasn't a collaborator
/// is reported, not treated as an error.
#[derive(Debug, Clone, Serialize)]
pub struct UnshareOutcome {
    pub removed: bool,
    pub user: UserInfo,
}

/// Grant a user access to a note by username (case-insensitive match).
pub async fn share_note(
    pool: &SqlitePool,
    actor: &User,
    note_id: i64,
    username: &str,
) -> ServiceResult<UserInfo> {
    let note = access::authored_note(pool, note_id, actor.id).await?;

    let target = User::by_username_ci(pool, username)
        .await?
        .ok_or_else(|| {
            ServiceError::Validation(format!("User \"{}\" was not found", username.trim()))
        })?;

    if target.id == actor.id {
        return Err(ServiceError::validation(
            "You cannot share a note with yourself",
        ));
    }
    if Note::is_collaborator(pool, note.id, target.id).await? {
        return Err(ServiceError::Validation(format!(
            "\"{}\" is already a collaborator on this note",
            target.username
        )));
    }

    sqlx::query("INSERT INTO note_collaborators (note_id, user_id) VALUES (?, ?)")
        .bind(note.id)
        .bind(target.id)
        .execute(pool)
        .await?;

    Ok(target.to_info())
}

/// Revoke a user's access to a note.
pub async fn unshare_note(
    pool: &SqlitePool,
    actor: &User,
    note_id: i64,
    user_id: i64,
) -> ServiceResult<UnshareOutcome> {
    let note = access::authored_note(pool, note_id, actor.id).await?;

    let target = User::by_id(pool, user_id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let removed = if Note::is_collaborator(pool, note.id, target.id).await? {
        sqlx::query("DELETE FROM note_collaborators WHERE note_id = ? AND user_id = ?")
            .bind(note.id)
            .bind(target.id)
            .execute(pool)
            .await?;
        true
    } else {
        false
    };

    Ok(UnshareOutcome {
        removed,
        user: target.to_info(),
    })
}
