//! Lexical relative-path computation.

use std::iter;

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Compute the relative path leading from `from` to `to`.
///
/// Both inputs have `\` converted to `/` and trailing separators removed.
/// Segments are compared case-sensitively; the result climbs out of every
/// `from` segment past the common prefix and descends into the rest of
/// `to`. Identical paths yield the empty string.
///
/// This never touches the filesystem; pass resolved absolute paths for
/// results that match the real directory tree.
///
/// # Examples
///
/// ```
/// use pathkit::path::relative;
///
/// assert_eq!(
///     relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb"),
///     "../../impl/bbb"
/// );
/// assert_eq!(relative("/a/b", "/a/b/"), "");
/// ```
#[must_use]
pub fn relative(from: &str, to: &str) -> String {
    let from = from.replace('\\', "/");
    let to = to.replace('\\', "/");
    let from = from.trim_end_matches('/');
    let to = to.trim_end_matches('/');

    if from == to {
        return String::new();
    }

    let from_segments = segments(from);
    let to_segments = segments(to);

    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    iter::repeat("..")
        .take(from_segments.len() - common)
        .chain(to_segments[common..].iter().copied())
        .collect::<Vec<_>>()
        .join("/")
}
