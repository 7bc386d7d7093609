//! Notebook endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tower_sessions::Session;

use api::models::NotebookInfo;
use api::notebooks::{self, NotebookDraft, NotebookNotes};

use crate::error::ApiError;
use crate::routes::auth::require_user;
use crate::routes::AppState;

/// GET /notebooks — the actor's notebooks, by name.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<NotebookInfo>>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let notebooks = notebooks::list_notebooks(&state.pool, &user).await?;
    Ok(Json(notebooks))
}

/// POST /notebooks
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(draft): Json<NotebookDraft>,
) -> Result<(StatusCode, Json<NotebookInfo>), ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let notebook = notebooks::create_notebook(&state.pool, &user, draft).await?;
    Ok((StatusCode::CREATED, Json(notebook)))
}

/// PUT /notebooks/{id}
pub async fn rename(
    State(state): State<AppState>,
    session: Session,
    Path(notebook_id): Path<i64>,
    Json(draft): Json<NotebookDraft>,
) -> Result<Json<NotebookInfo>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let notebook = notebooks::rename_notebook(&state.pool, &user, notebook_id, draft).await?;
    Ok(Json(notebook))
}

/// DELETE /notebooks/{id} — contained notes survive, unfiled.
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(notebook_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    notebooks::delete_notebook(&state.pool, &user, notebook_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /notebooks/{id}/notes
pub async fn notes(
    State(state): State<AppState>,
    session: Session,
    Path(notebook_id): Path<i64>,
) -> Result<Json<NotebookNotes>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let listing = notebooks::notes_in_notebook(&state.pool, &user, notebook_id).await?;
    Ok(Json(listing))
}
