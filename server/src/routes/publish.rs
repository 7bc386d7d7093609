//! Publication endpoints and the anonymous public view.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use tower_sessions::Session;

use api::markdown;
use api::publish::{self, PublicationState};

use crate::error::ApiError;
use crate::routes::auth::require_user;
use crate::routes::AppState;

/// POST /notes/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
) -> Result<Json<PublicationState>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let publication = publish::publish_note(&state.pool, &user, note_id).await?;
    Ok(Json(publication))
}

/// POST /notes/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
) -> Result<Json<PublicationState>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let publication = publish::unpublish_note(&state.pool, &user, note_id).await?;
    Ok(Json(publication))
}

/// GET /public/{slug} — no login required. Served as a full HTML page so
/// a shared link is readable in any browser.
pub async fn public_view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    let note = publish::public_note(&state.pool, &slug).await?;
    Ok(Html(markdown::standalone_document(&note.title, &note.html)))
}
