//! Capability checks for notes.
//!
//! There is no stored role: for a given note an actor is the author, a
//! collaborator, or a stranger, derived from the row and the association
//! table at the moment of the check.

use sqlx::SqlitePool;

use crate::models::Note;
use crate::{ServiceError, ServiceResult};

/// The actor's relationship to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteRole {
    Author,
    Collaborator,
    Stranger,
}

impl NoteRole {
    pub fn can_view(self) -> bool {
        matches!(self, NoteRole::Author | NoteRole::Collaborator)
    }

    /// Content and tag edits; notebook reassignment stays author-only.
    pub fn can_edit(self) -> bool {
        matches!(self, NoteRole::Author | NoteRole::Collaborator)
    }

    pub fn is_author(self) -> bool {
        matches!(self, NoteRole::Author)
    }
}

/// Determine the actor's role for a note.
pub async fn role_for(pool: &SqlitePool, note: &Note, user_id: i64) -> Result<NoteRole, sqlx::Error> {
    if note.author_id == user_id {
        return Ok(NoteRole::Author);
    }
    if Note::is_collaborator(pool, note.id, user_id).await? {
        return Ok(NoteRole::Collaborator);
    }
    Ok(NoteRole::Stranger)
}

/// Load a note and require view access (author or collaborator).
pub async fn viewable_note(
    pool: &SqlitePool,
    note_id: i64,
    user_id: i64,
) -> ServiceResult<(Note, NoteRole)> {
    let note = Note::by_id(pool, note_id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    let role = role_for(pool, &note, user_id).await?;
    if !role.can_view() {
        return Err(ServiceError::Forbidden);
    }
    Ok((note, role))
}

/// Load a note and require the actor to be its author.
pub async fn authored_note(
    pool: &SqlitePool,
    note_id: i64,
    user_id: i64,
) -> ServiceResult<Note> {
    let note = Note::by_id(pool, note_id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    if note.author_id != user_id {
        return Err(ServiceError::Forbidden);
    }
    Ok(note)
}
