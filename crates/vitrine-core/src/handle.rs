//! Social handle normalization.

/// Strip the leading run of `@` characters from a handle.
///
/// Everything after the first non-`@` character is left untouched, so
/// `"@@me@home"` becomes `"me@home"`.
pub fn normalize_handle(handle: Option<&str>) -> Option<&str> {
    handle.map(|h| h.trim_start_matches('@'))
}

/// Display label for a handle-based identity: `@` plus the normalized handle.
///
/// Returns `None` when the handle is missing or consists only of `@`.
pub fn handle_label(handle: Option<&str>) -> Option<String> {
    normalize_handle(handle)
        .filter(|h| !h.trim().is_empty())
        .map(|h| format!("@{}", h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_at_run() {
        assert_eq!(normalize_handle(Some("@byshabito")), Some("byshabito"));
        assert_eq!(normalize_handle(Some("@@@byshabito")), Some("byshabito"));
    }

    #[test]
    fn leaves_inner_and_trailing_at_alone() {
        assert_eq!(normalize_handle(Some("@@me@home@")), Some("me@home@"));
        assert_eq!(normalize_handle(Some("plain")), Some("plain"));
    }

    #[test]
    fn none_stays_none() {
        assert_eq!(normalize_handle(None), None);
        assert_eq!(handle_label(None), None);
    }

    #[test]
    fn label_prefixes_single_at() {
        assert_eq!(handle_label(Some("@byshabito")).as_deref(), Some("@byshabito"));
        assert_eq!(handle_label(Some("by_shabito")).as_deref(), Some("@by_shabito"));
    }

    #[test]
    fn label_is_absent_for_bare_at() {
        assert_eq!(handle_label(Some("@@")), None);
        assert_eq!(handle_label(Some("")), None);
    }
}
