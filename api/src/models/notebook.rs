use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Full notebook record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct Notebook {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Notebook {
    pub fn to_info(&self) -> NotebookInfo {
        NotebookInfo {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }

    /// Lookup scoped to the owner; someone else's notebook is as good as
    /// absent.
    pub async fn by_id_for_owner(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Notebook>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM notebooks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_owner(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Notebook>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM notebooks WHERE user_id = ? ORDER BY name")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Case-sensitive exact-name check among the owner's notebooks.
    pub async fn name_taken(
        pool: &SqlitePool,
        user_id: i64,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM notebooks WHERE user_id = ? AND name = ?")
                .bind(user_id)
                .bind(name)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }
}

/// Notebook information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotebookInfo {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
