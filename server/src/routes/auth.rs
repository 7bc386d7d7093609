//! Registration, login/logout, and current-user resolution.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use api::auth::SESSION_USER_ID_KEY;
use api::models::{User, UserInfo};
use api::ServiceError;

use crate::error::ApiError;
use crate::routes::AppState;

/// Resolve the session's user, if any. A stale id (user deleted since the
/// cookie was issued) reads as unauthenticated.
pub(crate) async fn current_user(
    session: &Session,
    pool: &SqlitePool,
) -> Result<Option<User>, ApiError> {
    let user_id: Option<i64> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;
    let Some(user_id) = user_id else {
        return Ok(None);
    };
    let user = User::by_id(pool, user_id)
        .await
        .map_err(ServiceError::from)?;
    Ok(user)
}

/// Like [`current_user`] but a missing login is a 401.
pub(crate) async fn require_user(session: &Session, pool: &SqlitePool) -> Result<User, ApiError> {
    current_user(session, pool)
        .await?
        .ok_or_else(ApiError::unauthorized)
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email address.
    pub username: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let user = api::auth::register(
        &state.pool,
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    session
        .insert(SESSION_USER_ID_KEY, user.id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(user.to_info())))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserInfo>, ApiError> {
    let user = api::auth::authenticate(&state.pool, &payload.username, &payload.password).await?;

    session
        .insert(SESSION_USER_ID_KEY, user.id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(user.to_info()))
}

pub async fn logout(session: Session) -> Result<StatusCode, ApiError> {
    session
        .flush()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Option<UserInfo>>, ApiError> {
    let user = current_user(&session, &state.pool).await?;
    Ok(Json(user.map(|u| u.to_info())))
}
