//! Markdown-to-HTML rendering.
//!
//! Thin wrapper over pulldown-cmark with the extensions the application
//! relies on: fenced code (on by default), tables, strikethrough, footnotes
//! and task lists. The renderer emits HTML only; it never evaluates input.

use pulldown_cmark::{html, Options, Parser};

/// Render Markdown text to an HTML fragment.
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Wrap a rendered fragment in a minimal styled standalone document, used
/// for HTML export and the public note view.
pub fn standalone_document(title: &str, body_html: &str) -> String {
    let title = escape_text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
        body {{ font-family: sans-serif; margin: 2em; line-height: 1.6; }}
        h1 {{ border-bottom: 1px solid #eee; padding-bottom: 0.3em; }}
        pre {{ background-color: #f8f8f8; padding: 1em; border: 1px solid #ddd; overflow: auto; border-radius: 3px; }}
        code {{ font-family: monospace; background-color: #f8f8f8; padding: 0.2em 0.4em; border-radius: 3px; }}
        pre > code {{ background-color: transparent; padding: 0; border-radius: 0; }}
        table {{ border-collapse: collapse; margin-bottom: 1em; width: auto; }}
        th, td {{ border: 1px solid #ddd; padding: 0.5em; text-align: left; }}
        th {{ background-color: #f8f8f8; }}
        blockquote {{ border-left: 4px solid #ddd; padding-left: 1em; color: #666; margin-left: 0; }}
        img {{ max-width: 100%; height: auto; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <hr>
    {body_html}
    <hr>
    <p><small>Exported from Markdown Notes</small></p>
</body>
</html>"#
    )
}

/// Escape text for interpolation into HTML element content.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
