//! File export and import endpoints.

use axum::extract::{Multipart, Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tower_sessions::Session;

use api::models::NoteInfo;
use api::transfer::{self, Export};

use crate::error::ApiError;
use crate::routes::auth::require_user;
use crate::routes::AppState;

fn attachment(export: Export) -> Response {
    (
        [
            (CONTENT_TYPE, export.media_type.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.bytes,
    )
        .into_response()
}

/// GET /notes/{id}/export/md
pub async fn export_md(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
) -> Result<Response, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let export = transfer::export_markdown(&state.pool, &user, note_id).await?;
    Ok(attachment(export))
}

/// GET /notes/{id}/export/html
pub async fn export_html(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
) -> Result<Response, ApiError> {
    let user = require_user(&session, &state.pool).await?;
    let export = transfer::export_html(&state.pool, &user, note_id).await?;
    Ok(attachment(export))
}

/// POST /import — multipart upload; the note comes from the `file` field.
pub async fn import(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<NoteInfo>), ApiError> {
    let user = require_user(&session, &state.pool).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .ok_or_else(|| ApiError::bad_request("uploaded file has no filename"))?
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        let note = transfer::import_note(&state.pool, &user, &filename, &data).await?;
        return Ok((StatusCode::CREATED, Json(note)));
    }

    Err(ApiError::bad_request("missing \"file\" field"))
}
