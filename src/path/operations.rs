//! Path normalization implementation

use crate::error::PathError;

/// Normalizes a requested name into slash-consistent form.
///
/// Backslash separators become forward slashes, `.` and `..` segments are
/// collapsed, and repeated slashes merge into one. A trailing slash marks a
/// directory-style reference and survives normalization.
pub fn clean_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let path = name.replace('\\', "/");
    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&"..") | None => {
                    // Cannot pop above the start of a relative path;
                    // an absolute path discards leading `..` segments.
                    if !absolute {
                        segments.push("..");
                    }
                }
                Some(_) => {
                    segments.pop();
                }
            },
            other => segments.push(other),
        }
    }

    let mut cleaned = segments.join("/");
    if absolute {
        cleaned.insert(0, '/');
    }
    if trailing && !cleaned.ends_with('/') {
        cleaned.push('/');
    }
    cleaned
}

/// Joins a cleaned name onto the configured root prefix.
///
/// Fails when the resolved key would land outside the root.
pub fn resolve_key(root: &str, name: &str) -> Result<String, PathError> {
    let cleaned = clean_name(name);
    let relative = cleaned.trim_start_matches('/');
    let base = root.trim_matches('/');

    let key = if base.is_empty() {
        relative.to_string()
    } else if relative.is_empty() {
        base.to_string()
    } else {
        clean_name(&format!("{}/{}", base, relative))
    };

    let escaped = if base.is_empty() {
        key == ".." || key.starts_with("../")
    } else {
        key != base && !key.starts_with(&format!("{}/", base))
    };

    if escaped {
        return Err(PathError::PathTraversal(name.to_string()));
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("path/to/somewhere"), "path/to/somewhere");
    }

    #[test]
    fn test_clean_name_normalize() {
        assert_eq!(clean_name("path/to/../somewhere"), "path/somewhere");
    }

    #[test]
    fn test_clean_name_trailing_slash() {
        assert_eq!(clean_name("path/to/somewhere/"), "path/to/somewhere/");
    }

    #[test]
    fn test_clean_name_windows() {
        assert_eq!(clean_name("path\\to\\somewhere"), "path/to/somewhere");
    }

    #[test]
    fn test_clean_name_repeated_slashes() {
        assert_eq!(clean_name("path//to///somewhere"), "path/to/somewhere");
    }

    #[test]
    fn test_clean_name_empty() {
        assert_eq!(clean_name(""), "");
    }

    #[test]
    fn test_clean_name_lone_slash() {
        assert_eq!(clean_name("/"), "/");
    }

    #[test]
    fn test_clean_name_collapses_to_nothing() {
        assert_eq!(clean_name("path/.."), "");
        assert_eq!(clean_name("."), "");
    }

    #[test]
    fn test_clean_name_idempotent() {
        for raw in [
            "path/to/somewhere",
            "path/to/../somewhere",
            "path/to/somewhere/",
            "path\\to\\somewhere",
            "path//to",
            "../up",
            "",
            "/",
        ] {
            let once = clean_name(raw);
            assert_eq!(clean_name(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_resolve_key_joins_root() {
        assert_eq!(
            resolve_key("media", "docs/report.txt").unwrap(),
            "media/docs/report.txt"
        );
    }

    #[test]
    fn test_resolve_key_without_root() {
        assert_eq!(resolve_key("", "docs/report.txt").unwrap(), "docs/report.txt");
    }

    #[test]
    fn test_resolve_key_empty_name_is_root() {
        assert_eq!(resolve_key("media", "").unwrap(), "media");
        assert_eq!(resolve_key("", "").unwrap(), "");
    }

    #[test]
    fn test_resolve_key_keeps_trailing_slash() {
        assert_eq!(resolve_key("media", "docs/").unwrap(), "media/docs/");
    }

    #[test]
    fn test_resolve_key_rejects_traversal() {
        assert!(resolve_key("media", "../outside.txt").is_err());
        assert!(resolve_key("media", "docs/../../outside.txt").is_err());
    }

    #[test]
    fn test_resolve_key_rejects_relative_escape() {
        assert!(resolve_key("", "..").is_err());
        assert!(resolve_key("", "../escape.txt").is_err());
    }

    #[test]
    fn test_resolve_key_allows_inner_parent_segments() {
        assert_eq!(
            resolve_key("media", "docs/extra/../report.txt").unwrap(),
            "media/docs/report.txt"
        );
    }
}
