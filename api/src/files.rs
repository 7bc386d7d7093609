//! Attachment filename sanitisation.

/// Default stem when a title sanitises down to nothing.
const FALLBACK_STEM: &str = "note";

/// Maximum number of title characters considered for the filename.
const MAX_STEM_CHARS: usize = 50;

/// Build a filesystem-safe attachment filename from a note title.
///
/// Takes the first 50 characters, maps spaces to underscores, keeps ASCII
/// alphanumerics plus `.`, `-` and `_`, and drops everything else. An empty
/// result falls back to `note`. The extension is appended verbatim.
pub fn export_filename(title: &str, extension: &str) -> String {
    let mut stem = String::new();
    for ch in title.chars().take(MAX_STEM_CHARS) {
        match ch {
            ' ' => stem.push('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => stem.push(c),
            _ => {}
        }
    }
    // A stem of only dots would vanish or escape as a hidden file name.
    let stem = stem.trim_matches('.').to_string();
    let stem = if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    };
    format!("{stem}.{extension}")
}
