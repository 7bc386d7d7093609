//! Note CRUD, listing, and tag filtering.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::access::{self, NoteRole};
use crate::markdown;
use crate::models::{normalize_tag_names, Note, NoteInfo, NoteSummary, Notebook, Tag, User, UserInfo};
use crate::{ServiceError, ServiceResult};

const TITLE_MAX_CHARS: usize = 120;
const TAG_STRING_MAX_CHARS: usize = 255;

/// Incoming note fields, shared by create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub notebook_id: Option<i64>,
    /// Comma-separated tag names; replaces the full tag set on update.
    pub tags: Option<String>,
}

/// A persisted note plus a non-fatal warning (e.g. the requested notebook
/// was not the actor's and the assignment was dropped).
#[derive(Debug, Clone, Serialize)]
pub struct SavedNote {
    pub note: NoteInfo,
    pub warning: Option<String>,
}

/// Detail view of a note for an authenticated reader.
#[derive(Debug, Clone, Serialize)]
pub struct NoteDetail {
    pub note: NoteInfo,
    pub html: String,
    pub is_author: bool,
    /// Only populated for the author; collaborators don't see each other.
    pub collaborators: Vec<UserInfo>,
}

/// Notes carrying a tag, for the tag-filter view.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedNotes {
    pub tag: String,
    pub notes: Vec<NoteSummary>,
}

fn validate_draft(draft: &NoteDraft) -> ServiceResult<()> {
    let title_len = draft.title.trim().chars().count();
    if title_len == 0 || title_len > TITLE_MAX_CHARS {
        return Err(ServiceError::validation(
            "Title must be between 1 and 120 characters",
        ));
    }
    if draft.content.trim().is_empty() {
        return Err(ServiceError::validation("Content must not be empty"));
    }
    if let Some(tags) = &draft.tags {
        if tags.chars().count() > TAG_STRING_MAX_CHARS {
            return Err(ServiceError::validation(
                "Tag list must be at most 255 characters",
            ));
        }
    }
    Ok(())
}

/// Resolve a requested notebook id against the actor's notebooks. A
/// notebook that doesn't exist or belongs to someone else is dropped with a
/// warning rather than failing the whole save.
async fn resolve_notebook(
    pool: &SqlitePool,
    actor_id: i64,
    requested: Option<i64>,
) -> Result<(Option<i64>, Option<String>), sqlx::Error> {
    let Some(notebook_id) = requested else {
        return Ok((None, None));
    };
    if Notebook::by_id_for_owner(pool, notebook_id, actor_id)
        .await?
        .is_some()
    {
        Ok((Some(notebook_id), None))
    } else {
        tracing::warn!(notebook_id, actor_id, "ignoring notebook not owned by actor");
        Ok((
            None,
            Some("Selected notebook was not found or is not yours".to_string()),
        ))
    }
}

pub async fn create_note(
    pool: &SqlitePool,
    actor: &User,
    draft: NoteDraft,
) -> ServiceResult<SavedNote> {
    validate_draft(&draft)?;
    let (notebook_id, warning) = resolve_notebook(pool, actor.id, draft.notebook_id).await?;
    let mut tag_names = normalize_tag_names(draft.tags.as_deref().unwrap_or(""));

    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let note: Note = sqlx::query_as(
        "INSERT INTO notes (title, content, author_id, notebook_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
    )
    .bind(draft.title.trim())
    .bind(&draft.content)
    .bind(actor.id)
    .bind(notebook_id)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for name in &tag_names {
        let tag_id = Tag::find_or_create(&mut tx, name).await?;
        sqlx::query("INSERT INTO note_tags (note_id, tag_id) VALUES (?, ?)")
            .bind(note.id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    // Responses list tags by name, the same order the read path returns.
    tag_names.sort();
    Ok(SavedNote {
        note: note.to_info(tag_names),
        warning,
    })
}

pub async fn get_note(pool: &SqlitePool, actor: &User, note_id: i64) -> ServiceResult<NoteDetail> {
    let (note, role) = access::viewable_note(pool, note_id, actor.id).await?;
    let tags = note.tag_names(pool).await?;
    let collaborators = if role.is_author() {
        note.collaborators(pool).await?
    } else {
        Vec::new()
    };
    let html = markdown::render(&note.content);
    Ok(NoteDetail {
        note: note.to_info(tags),
        html,
        is_author: role.is_author(),
        collaborators,
    })
}

pub async fn update_note(
    pool: &SqlitePool,
    actor: &User,
    note_id: i64,
    draft: NoteDraft,
) -> ServiceResult<SavedNote> {
    let (note, role) = access::viewable_note(pool, note_id, actor.id).await?;
    if !role.can_edit() {
        return Err(ServiceError::Forbidden);
    }
    validate_draft(&draft)?;

    // Only the author controls notebook assignment; a collaborator's value
    // is ignored and the stored one kept.
    let (notebook_id, warning) = if role == NoteRole::Author {
        resolve_notebook(pool, actor.id, draft.notebook_id).await?
    } else {
        (note.notebook_id, None)
    };
    let mut tag_names = normalize_tag_names(draft.tags.as_deref().unwrap_or(""));

    let mut tx = pool.begin().await?;

    let note: Note = sqlx::query_as(
        "UPDATE notes SET title = ?, content = ?, notebook_id = ?, updated_at = ?
         WHERE id = ? RETURNING *",
    )
    .bind(draft.title.trim())
    .bind(&draft.content)
    .bind(notebook_id)
    .bind(Utc::now())
    .bind(note.id)
    .fetch_one(&mut *tx)
    .await?;

    // Tag reassignment replaces the whole set.
    sqlx::query("DELETE FROM note_tags WHERE note_id = ?")
        .bind(note.id)
        .execute(&mut *tx)
        .await?;
    for name in &tag_names {
        let tag_id = Tag::find_or_create(&mut tx, name).await?;
        sqlx::query("INSERT INTO note_tags (note_id, tag_id) VALUES (?, ?)")
            .bind(note.id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tag_names.sort();
    Ok(SavedNote {
        note: note.to_info(tag_names),
        warning,
    })
}

pub async fn delete_note(pool: &SqlitePool, actor: &User, note_id: i64) -> ServiceResult<()> {
    let note = access::authored_note(pool, note_id, actor.id).await?;

    // Association rows go with the note; the tag entities themselves stay.
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM note_tags WHERE note_id = ?")
        .bind(note.id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM note_collaborators WHERE note_id = ?")
        .bind(note.id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM notes WHERE id = ?")
        .bind(note.id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(())
}

/// Notes the actor authored or collaborates on, most recently updated first.
pub async fn list_notes(pool: &SqlitePool, actor: &User) -> ServiceResult<Vec<NoteSummary>> {
    let notes = Note::list_accessible(pool, actor.id).await?;
    Ok(notes.iter().map(Note::to_summary).collect())
}

/// Accessible notes bearing the named tag. Unknown tags are a NotFound, not
/// an empty list.
pub async fn list_notes_by_tag(
    pool: &SqlitePool,
    actor: &User,
    tag_name: &str,
) -> ServiceResult<TaggedNotes> {
    let tag = Tag::by_name_ci(pool, tag_name)
        .await?
        .ok_or(ServiceError::NotFound)?;
    let notes = Note::list_accessible_by_tag(pool, actor.id, tag.id).await?;
    Ok(TaggedNotes {
        tag: tag.name,
        notes: notes.iter().map(Note::to_summary).collect(),
    })
}
