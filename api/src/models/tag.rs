use sqlx::{FromRow, SqliteConnection, SqlitePool};

/// A shared label. Names are stored lowercase and globally unique; tags are
/// created lazily and never deleted, so an orphaned tag simply stays around.
#[derive(Debug, Clone, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    /// Case-insensitive exact lookup. Stored names are lowercase, so
    /// lowering the input is all the normalisation needed.
    pub async fn by_name_ci(pool: &SqlitePool, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM tags WHERE name = ?")
            .bind(name.trim().to_lowercase())
            .fetch_optional(pool)
            .await
    }

    /// Find or create the tag with the given (already normalised) name.
    /// Runs on the caller's transaction so a failed note save discards any
    /// tags created along the way.
    pub async fn find_or_create(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<i64, sqlx::Error> {
        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;
        if let Some((id,)) = existing {
            return Ok(id);
        }
        let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
            .bind(name)
            .execute(&mut *conn)
            .await?;
        Ok(result.last_insert_rowid())
    }
}

/// Normalise a comma-separated tag string: split, trim, lowercase, drop
/// empty tokens, deduplicate. Order of first appearance is preserved.
pub fn normalize_tag_names(tag_string: &str) -> Vec<String> {
    let mut names = Vec::new();
    for token in tag_string.split(',') {
        let name = token.trim().to_lowercase();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
