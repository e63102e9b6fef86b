//! Inline Markdown for titles, subtitles and descriptions.

use pulldown_cmark::{html, Options, Parser};

/// Render a short Markdown snippet to HTML without a wrapping paragraph.
///
/// Owner-supplied configuration is trusted, so raw HTML passes through.
pub fn render_inline(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let trimmed = html_output.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        // Only unwrap a single paragraph.
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => trimmed.to_string(),
    }
}
