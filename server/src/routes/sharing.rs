//! Collaborator management endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tower_sessions::Session;

use api::models::UserInfo;
use api::sharing::{self, UnshareOutcome};

use crate::error::ApiError;
use crate::routes::auth::require_user;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub username: String,
}

/// POST /notes/{id}/share — grant a user edit access to the note.
pub async fn share(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
    Json(payload): Json<ShareRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let collaborator = sharing::share_note(&state.pool, &user, note_id, &payload.username).await?;
    Ok((StatusCode::CREATED, Json(collaborator)))
}

/// POST /notes/{id}/unshare/{user_id} — revoke a collaborator's access.
/// Revoking a user who was never a collaborator succeeds with `removed: false`.
pub async fn unshare(
    State(state): State<AppState>,
    session: Session,
    Path((note_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<UnshareOutcome>, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let outcome = sharing::unshare_note(&state.pool, &user, note_id, user_id).await?;
    Ok(Json(outcome))
}
