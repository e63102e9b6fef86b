//! Inline SVG icons.

const STROKE_OPEN: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#;
const FILL_OPEN: &str =
    r#"<svg class="icon" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">"#;

/// Markup for the icon called `name`, or `None` if unknown.
pub fn icon_svg(name: &str) -> Option<String> {
    let (open, body) = match name {
        "mail" => (
            STROKE_OPEN,
            r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        "x" => (
            FILL_OPEN,
            r#"<path d="M18.9 2H22l-6.8 7.8L23.2 22h-6.3l-4.9-6.4L6.4 22H3.3l7.3-8.3L2.9 2h6.4l4.4 5.9zm-1.1 18h1.7L8.2 3.9H6.4z"/>"#,
        ),
        "instagram" => (
            STROKE_OPEN,
            r#"<rect x="2" y="2" width="20" height="20" rx="5"/><path d="M16 11.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4z"/><line x1="17.5" y1="6.5" x2="17.5" y2="6.5"/>"#,
        ),
        "threads" => (
            STROKE_OPEN,
            r#"<path d="M16.5 11.2c-.6-3-3.1-4.2-5.4-3.7-2.6.6-3.3 3.4-1.6 4.7 1.8 1.4 6.8.6 6.8 4.3 0 2.9-2.9 4.5-5.8 4.5C6.8 21 4 18 4 12S6.8 3 11 3c3.4 0 5.9 1.7 7 4.7"/>"#,
        ),
        "chaturbate" => (
            STROKE_OPEN,
            r#"<path d="M21 12a8 8 0 0 1-11.6 7.1L4 20l1-4.6A8 8 0 1 1 21 12z"/><circle cx="9" cy="12" r=".5"/><circle cx="15" cy="12" r=".5"/>"#,
        ),
        "buymeacoffee" | "coffee" => (
            STROKE_OPEN,
            r#"<path d="M10 2v2"/><path d="M14 2v2"/><path d="M16 8a1 1 0 0 1 1 1v8a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V9a1 1 0 0 1 1-1h14a4 4 0 1 1 0 8h-1"/><path d="M6 2v2"/>"#,
        ),
        "github" => (
            STROKE_OPEN,
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.1-1.3-.3-2.5-1-3.5.3-1.2.3-2.4 0-3.5 0 0-1 0-3 1.5-2.6-.5-5.4-.5-8 0C6 2 5 2 5 2c-.3 1.1-.3 2.3 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.4.5-.7 1.1-.8 1.8-.2.7-.3 1.4-.2 2.2v3.5"/><path d="M9 18c-4.5 2-5-2-7-2"/>"#,
        ),
        "nostr" => (
            STROKE_OPEN,
            r#"<circle cx="12" cy="12" r="9"/><path d="M8 15V9l8 6V9"/>"#,
        ),
        "bitcoin" => (
            STROKE_OPEN,
            r#"<path d="M11.8 18.6c4.6.8 5.8-4.4 1.6-5.4m-3.3 5-1 5.5M7 17.5l4.8.9m2.4-13.6 1-5.5M17.8 6.8l-7.5-1.4a.5.5 0 0 0-.6.4l-1.8 10m8.8-5.9c.8-4.5-4.7-5.3-6.9-5.6M9.2 5.2l1-5.5"/>"#,
        ),
        "zap" => (
            STROKE_OPEN,
            r#"<path d="M4 14a1 1 0 0 1-.8-1.6l9.9-10.2a.5.5 0 0 1 .9.5l-1.9 6A1 1 0 0 0 13 10h7a1 1 0 0 1 .8 1.6l-9.9 10.2a.5.5 0 0 1-.9-.5l1.9-6A1 1 0 0 0 11 14z"/>"#,
        ),
        "coins" => (
            STROKE_OPEN,
            r#"<circle cx="8" cy="8" r="6"/><path d="M18.1 10.4A6 6 0 1 1 10.3 18"/><path d="M7 6h1v4"/><path d="m16.7 13.9.7.7-2.8 2.8"/>"#,
        ),
        "external" => (
            STROKE_OPEN,
            r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
        ),
        "check" => (STROKE_OPEN, r#"<path d="M20 6 9 17l-5-5"/>"#),
        "code" => (
            STROKE_OPEN,
            r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#,
        ),
        "scroll" => (
            STROKE_OPEN,
            r#"<path d="M15 12h-5"/><path d="M15 8h-5"/><path d="M19 17V5a2 2 0 0 0-2-2H4"/><path d="M8 21h12a2 2 0 0 0 2-2v-1a1 1 0 0 0-1-1H11a1 1 0 0 0-1 1v1a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v2a1 1 0 0 0 1 1h3"/>"#,
        ),
        "sun" => (
            STROKE_OPEN,
            r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M6.3 17.7l-1.4 1.4M19.1 4.9l-1.4 1.4"/>"#,
        ),
        "moon" => (
            STROKE_OPEN,
            r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"/>"#,
        ),
        _ => return None,
    };

    Some(format!("{}{}</svg>", open, body))
}
