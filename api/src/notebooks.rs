//! Notebook CRUD and per-notebook note listing.
//!
//! Notebooks are strictly per-user: every lookup is scoped to the owner, so
//! someone else's notebook id behaves like a missing one.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::{Note, NoteSummary, Notebook, NotebookInfo, User};
use crate::{ServiceError, ServiceResult};

const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct NotebookDraft {
    pub name: String,
}

/// A notebook and the notes currently filed in it.
#[derive(Debug, Clone, Serialize)]
pub struct NotebookNotes {
    pub notebook: NotebookInfo,
    pub notes: Vec<NoteSummary>,
}

fn validate_name(name: &str) -> ServiceResult<()> {
    let len = name.chars().count();
    if len == 0 || len > NAME_MAX_CHARS {
        return Err(ServiceError::validation(
            "Notebook name must be between 1 and 100 characters",
        ));
    }
    Ok(())
}

pub async fn list_notebooks(pool: &SqlitePool, actor: &User) -> ServiceResult<Vec<NotebookInfo>> {
    let notebooks = Notebook::list_for_owner(pool, actor.id).await?;
    Ok(notebooks.iter().map(Notebook::to_info).collect())
}

pub async fn create_notebook(
    pool: &SqlitePool,
    actor: &User,
    draft: NotebookDraft,
) -> ServiceResult<NotebookInfo> {
    let name = draft.name.trim().to_string();
    validate_name(&name)?;
    if Notebook::name_taken(pool, actor.id, &name).await? {
        return Err(ServiceError::validation(
            "You already have a notebook with this name",
        ));
    }

    let notebook: Notebook = sqlx::query_as(
        "INSERT INTO notebooks (name, user_id, created_at) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(&name)
    .bind(actor.id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(notebook.to_info())
}

pub async fn rename_notebook(
    pool: &SqlitePool,
    actor: &User,
    notebook_id: i64,
    draft: NotebookDraft,
) -> ServiceResult<NotebookInfo> {
    let notebook = Notebook::by_id_for_owner(pool, notebook_id, actor.id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let name = draft.name.trim().to_string();
    validate_name(&name)?;

    // Uniqueness only matters when the name actually changes; saving a
    // notebook under its current name is fine.
    if name != notebook.name && Notebook::name_taken(pool, actor.id, &name).await? {
        return Err(ServiceError::validation(
            "You already have a notebook with this name",
        ));
    }

    let notebook: Notebook =
        sqlx::query_as("UPDATE notebooks SET name = ? WHERE id = ? RETURNING *")
            .bind(&name)
            .bind(notebook.id)
            .fetch_one(pool)
            .await?;

    Ok(notebook.to_info())
}

/// Delete a notebook. Its notes survive with their notebook reference
/// cleared.
pub async fn delete_notebook(
    pool: &SqlitePool,
    actor: &User,
    notebook_id: i64,
) -> ServiceResult<()> {
    let notebook = Notebook::by_id_for_owner(pool, notebook_id, actor.id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut tx = pool.begin().await?;
    sqlx::query("UPDATE notes SET notebook_id = NULL WHERE notebook_id = ?")
        .bind(notebook.id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM notebooks WHERE id = ?")
        .bind(notebook.id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(())
}

pub async fn notes_in_notebook(
    pool: &SqlitePool,
    actor: &User,
    notebook_id: i64,
) -> ServiceResult<NotebookNotes> {
    let notebook = Notebook::by_id_for_owner(pool, notebook_id, actor.id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    let notes = Note::list_in_notebook(pool, notebook.id).await?;
    Ok(NotebookNotes {
        notebook: notebook.to_info(),
        notes: notes.iter().map(Note::to_summary).collect(),
    })
}
