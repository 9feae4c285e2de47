//! Lexical path normalization.
//!
//! Normalization works on `/`-separated strings and never touches the
//! filesystem. It:
//! - Collapses runs of `/` into one
//! - Drops `.` segments
//! - Resolves `..` against the preceding segment
//! - Strips a trailing separator without ever reducing a root to nothing

use super::classify::drive_letter;

/// The anchor a normalized path hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root<'a> {
    /// No anchor; the path is relative.
    None,
    /// A leading `/`.
    Slash,
    /// A leading `X:` drive prefix (stored verbatim).
    Drive(&'a str),
}

impl Root<'_> {
    fn is_anchored(self) -> bool {
        !matches!(self, Self::None)
    }
}

fn split_root(path: &str) -> (Root<'_>, &str) {
    if drive_letter(path).is_some() {
        return (Root::Drive(&path[..2]), &path[2..]);
    }
    if let Some(rest) = path.strip_prefix('/') {
        return (Root::Slash, rest);
    }
    (Root::None, path)
}

/// Resolve `.` and `..` segments of a `/`-separated path.
///
/// Empty segments (from repeated or trailing separators) and `.` are
/// dropped. A `..` removes the preceding ordinary segment. When there is
/// nothing left to remove, an `anchored` path drops the `..` (you cannot go
/// above the root) while a relative path keeps it.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::resolve_segments;
///
/// assert_eq!(resolve_segments("a/./b/../c", true), vec!["a", "c"]);
/// assert_eq!(resolve_segments("../../x", true), vec!["x"]);
/// assert_eq!(resolve_segments("../../x", false), vec!["..", "..", "x"]);
/// ```
#[must_use]
pub fn resolve_segments(path: &str, anchored: bool) -> Vec<&str> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if anchored => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    segments
}

/// Normalize a `/`-separated path string.
///
/// A leading `/` or `X:` drive prefix anchors the path; dangling `..`
/// segments at the anchor are discarded. A relative path that collapses to
/// nothing becomes `.`.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize;
///
/// assert_eq!(normalize("/a/./b/../c/"), "/a/c");
/// assert_eq!(normalize("//a///b"), "/a/b");
/// assert_eq!(normalize("/.."), "/");
/// assert_eq!(normalize("a/../../b"), "../b");
/// assert_eq!(normalize("C:/temp/.."), "C:/");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let (root, rest) = split_root(path);
    let segments = resolve_segments(rest, root.is_anchored());
    let body = segments.join("/");

    match root {
        Root::Slash => format!("/{body}"),
        Root::Drive(drive) => format!("{drive}/{body}"),
        Root::None if body.is_empty() => ".".to_string(),
        Root::None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple() {
        assert_eq!(normalize("/a/./b/../c"), "/a/c");
    }

    #[test]
    fn test_normalize_multiple_parent() {
        assert_eq!(normalize("/a/b/../../c"), "/c");
    }

    #[test]
    fn test_normalize_root_only() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
    }

    // Going above the root is not an error: the extra `..` is dropped.
    #[test]
    fn test_normalize_dangling_parent_at_root() {
        assert_eq!(normalize("/a/../.."), "/");
        assert_eq!(normalize("/../../x"), "/x");
    }

    #[test]
    fn test_normalize_relative_keeps_dangling_parent() {
        assert_eq!(normalize("../a"), "../a");
        assert_eq!(normalize("a/../.."), "..");
        assert_eq!(normalize("../../a/../b"), "../../b");
    }

    #[test]
    fn test_normalize_relative_collapses_to_dot() {
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("."), ".");
        assert_eq!(normalize("a/.."), ".");
    }

    #[test]
    fn test_normalize_strips_trailing_separator() {
        assert_eq!(normalize("/a/b/"), "/a/b");
        assert_eq!(normalize("a/b//"), "a/b");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("//host//share/x"), "/host/share/x");
    }

    #[test]
    fn test_normalize_drive_root() {
        assert_eq!(normalize("C:/a/../.."), "C:/");
        assert_eq!(normalize("c:/a//b/./"), "c:/a/b");
        assert_eq!(normalize("C:"), "C:/");
    }

    #[test]
    fn test_normalize_dot_like_names_are_ordinary() {
        assert_eq!(normalize("/a/.../b"), "/a/.../b");
        assert_eq!(normalize("/a/..b/c"), "/a/..b/c");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    Just(String::new()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Normalization is idempotent
            #[test]
            fn normalize_idempotent(s in path_with_dots_strategy()) {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once.clone());
            }

            /// Absolute inputs stay absolute and lose every `.` and `..`
            #[test]
            fn normalize_absolute_has_no_dot_segments(s in path_with_dots_strategy()) {
                let normalized = normalize(&s);
                prop_assert!(normalized.starts_with('/'));
                for segment in normalized.split('/') {
                    prop_assert_ne!(segment, ".");
                    prop_assert_ne!(segment, "..");
                }
            }

            /// Output never contains a doubled separator or trailing slash
            #[test]
            fn normalize_no_redundant_separators(s in path_with_dots_strategy()) {
                let normalized = normalize(&s);
                prop_assert!(!normalized.contains("//"));
                prop_assert!(normalized == "/" || !normalized.ends_with('/'));
            }
        }
    }
}
