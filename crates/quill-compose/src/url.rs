//! URL path helpers.

/// Join URL path segments with single `/` separators.
///
/// Empty segments and `.` are dropped, so doubled separators never appear no
/// matter how the parts are slashed. A leading `/` on the first non-empty part
/// and a trailing `/` on the last part are preserved.
///
/// ```
/// use quill_compose::join_url_path;
///
/// assert_eq!(join_url_path(&["/app/", "__webpack_hmr", "client"]), "/app/__webpack_hmr/client");
/// assert_eq!(join_url_path(&["/", "/_quill/"]), "/_quill/");
/// ```
pub fn join_url_path(parts: &[&str]) -> String {
    let absolute = parts
        .iter()
        .find(|part| !part.is_empty())
        .is_some_and(|part| part.starts_with('/'));
    let trailing = parts.last().is_some_and(|part| part.ends_with('/'));

    let segments: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    let mut joined = String::new();
    if absolute {
        joined.push('/');
    }
    joined.push_str(&segments.join("/"));
    if trailing && !joined.ends_with('/') {
        joined.push('/');
    }
    joined
}

/// Whether `path` is an absolute or protocol-relative URL
pub fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_collapses_separators() {
        assert_eq!(
            join_url_path(&["/app", "__webpack_hmr", "client"]),
            "/app/__webpack_hmr/client"
        );
        assert_eq!(
            join_url_path(&["/app/", "/__webpack_hmr/", "client"]),
            "/app/__webpack_hmr/client"
        );
        assert_eq!(join_url_path(&["//", "a//b"]), "/a/b");
    }

    #[test]
    fn join_keeps_leading_and_trailing_slash() {
        assert_eq!(join_url_path(&["/", "_quill/"]), "/_quill/");
        assert_eq!(join_url_path(&["app", "x"]), "app/x");
        assert_eq!(join_url_path(&["/"]), "/");
        assert_eq!(join_url_path(&[]), "");
    }

    #[test]
    fn detects_urls() {
        assert!(is_url("https://cdn.example.com/_quill/"));
        assert!(is_url("//cdn.example.com/"));
        assert!(!is_url("/_quill/"));
        assert!(!is_url("cdn/"));
    }
}
