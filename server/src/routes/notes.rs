//! Note CRUD endpoints and the tag-filter view.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use api::models::NoteSummary;
use api::notes::{self, NoteDetail, NoteDraft, SavedNote, TaggedNotes};

use crate::error::ApiError;
use crate::routes::auth::require_user;
use crate::routes::AppState;
use tower_sessions::Session;

/// GET /notes — notes the actor authored or collaborates on.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let notes = notes::list_notes(&state.pool, &user).await?;
    Ok(Json(notes))
}

/// POST /notes
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(draft): Json<NoteDraft>,
) -> Result<(StatusCode, Json<SavedNote>), ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let saved = notes::create_note(&state.pool, &user, draft).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /notes/{id}
pub async fn view(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
) -> Result<Json<NoteDetail>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let detail = notes::get_note(&state.pool, &user, note_id).await?;
    Ok(Json(detail))
}

/// PUT /notes/{id}
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
    Json(draft): Json<NoteDraft>,
) -> Result<Json<SavedNote>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let saved = notes::update_note(&state.pool, &user, note_id, draft).await?;
    Ok(Json(saved))
}

/// DELETE /notes/{id}
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    notes::delete_note(&state.pool, &user, note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /tags/{name} — accessible notes carrying the tag.
pub async fn by_tag(
    State(state): State<AppState>,
    session: Session,
    Path(tag_name): Path<String>,
) -> Result<Json<TaggedNotes>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let tagged = notes::list_notes_by_tag(&state.pool, &user, &tag_name).await?;
    Ok(Json(tagged))
}
