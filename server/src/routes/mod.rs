//! Route table and shared handler state.

use axum::routing::{get, post, put};
use axum::Router;
use sqlx::SqlitePool;

pub mod auth;
pub mod notebooks;
pub mod notes;
pub mod publish;
pub mod sharing;
pub mod transfer;

/// Handler state; the pool is injected here once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/notes", get(notes::index).post(notes::create))
        .route(
            "/notes/{id}",
            get(notes::view).put(notes::update).delete(notes::remove),
        )
        .route("/tags/{name}", get(notes::by_tag))
        .route("/notebooks", get(notebooks::index).post(notebooks::create))
        .route(
            "/notebooks/{id}",
            put(notebooks::rename).delete(notebooks::remove),
        )
        .route("/notebooks/{id}/notes", get(notebooks::notes))
        .route("/notes/{id}/share", post(sharing::share))
        .route("/notes/{id}/unshare/{user_id}", post(sharing::unshare))
        .route("/notes/{id}/publish", post(publish::publish))
        .route("/notes/{id}/unpublish", post(publish::unpublish))
        .route("/public/{slug}", get(publish::public_view))
        .route("/notes/{id}/export/md", get(transfer::export_md))
        .route("/notes/{id}/export/html", get(transfer::export_html))
        .route("/import", post(transfer::import))
        .with_state(state)
}
