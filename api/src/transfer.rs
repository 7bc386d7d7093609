//! File import and export.
//!
//! Export produces an attachment (Markdown or a standalone HTML document);
//! import turns an uploaded text file into a fresh note for the actor, with
//! no notebook or tags.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::access;
use crate::files::export_filename;
use crate::markdown;
use crate::models::{Note, NoteInfo, User};
use crate::{ServiceError, ServiceResult};

const ALLOWED_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

/// An export ready to be sent as a file attachment.
#[derive(Debug, Clone)]
pub struct Export {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Export a note as raw Markdown: `# <title>`, a blank line, the content.
pub async fn export_markdown(
    pool: &SqlitePool,
    actor: &User,
    note_id: i64,
) -> ServiceResult<Export> {
    let (note, _role) = access::viewable_note(pool, note_id, actor.id).await?;
    let body = format!("# {}\n\n{}", note.title, note.content);
    Ok(Export {
        filename: export_filename(&note.title, "md"),
        media_type: "text/markdown; charset=utf-8",
        bytes: body.into_bytes(),
    })
}

/// Export a note rendered to a standalone HTML document.
pub async fn export_html(pool: &SqlitePool, actor: &User, note_id: i64) -> ServiceResult<Export> {
    let (note, _role) = access::viewable_note(pool, note_id, actor.id).await?;
    let fragment = markdown::render(&note.content);
    let document = markdown::standalone_document(&note.title, &fragment);
    Ok(Export {
        filename: export_filename(&note.title, "html"),
        media_type: "text/html; charset=utf-8",
        bytes: document.into_bytes(),
    })
}

/// Import one uploaded file as a new note owned by the actor.
pub async fn import_note(
    pool: &SqlitePool,
    actor: &User,
    filename: &str,
    data: &[u8],
) -> ServiceResult<NoteInfo> {
    let extension = filename
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();
    if filename.rsplit_once('.').is_none() || !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ServiceError::validation(
            "Only Markdown text files (.md, .markdown, .txt) can be imported",
        ));
    }

    let text = std::str::from_utf8(data).map_err(|_| ServiceError::Decoding)?;
    let (title, content) = extract_title_and_content(text, filename);

    let now = Utc::now();
    let note: Note = sqlx::query_as(
        "INSERT INTO notes (title, content, author_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?) RETURNING *",
    )
    .bind(&title)
    .bind(&content)
    .bind(actor.id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(note.to_info(Vec::new()))
}

/// Title rule: a first line of `# <something>` (trimmed, non-empty) becomes
/// the title with the trimmed remainder as content; otherwise the title
/// falls back to `Import: <filename>` and the whole file is the content.
fn extract_title_and_content(text: &str, filename: &str) -> (String, String) {
    let (first_line, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (text, None),
    };

    if let Some(candidate) = first_line.trim().strip_prefix("# ") {
        let candidate = candidate.trim();
        if !candidate.is_empty() {
            let content = rest.map(|r| r.trim().to_string()).unwrap_or_default();
            return (candidate.to_string(), content);
        }
    }

    (format!("Import: {filename}"), text.to_string())
}

#[cfg(test)]
mod tests {
    use super::extract_title_and_content;

    #[test]
    fn heading_first_line_becomes_title() {
        let (title, content) = extract_title_and_content("# My Notes\ncontent here", "a.md");
        assert_eq!(title, "My Notes");
        assert_eq!(content, "content here");
    }

    #[test]
    fn heading_without_text_falls_back_to_filename() {
        let (title, content) = extract_title_and_content("#  \nbody", "todo.md");
        assert_eq!(title, "Import: todo.md");
        assert_eq!(content, "#  \nbody");
    }

    #[test]
    fn plain_file_uses_filename_title_and_full_content() {
        let (title, content) = extract_title_and_content("just text", "notes.txt");
        assert_eq!(title, "Import: notes.txt");
        assert_eq!(content, "just text");
    }

    #[test]
    fn heading_only_file_has_empty_content() {
        let (title, content) = extract_title_and_content("# Solo", "a.md");
        assert_eq!(title, "Solo");
        assert_eq!(content, "");
    }
}
