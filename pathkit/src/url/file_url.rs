//! Conversion between filesystem paths and `file://` URLs.

use crate::error::{Error, Result};
use crate::path::classify::{classify, drive_letter, is_separator, PathKind};
use crate::path::convert::collapse_separators;
use crate::url::encoding::{decode_component, encode_segments};

/// The scheme prefix every file URL starts with.
pub const FILE_SCHEME: &str = "file://";

/// `X:` followed by a separator or nothing.
fn is_drive_path(path: &str) -> bool {
    drive_letter(path).is_some() && path[2..].chars().next().map_or(true, is_separator)
}

/// Convert a filesystem path into a `file://` URL.
///
/// - The empty path becomes `file:///`
/// - `X:\dir` or `X:/dir` becomes `file:///X:/dir`
/// - A UNC path `\\host\share` becomes `file://host/share`
/// - Anything else becomes `file://` plus the path with a leading `/`
///
/// Every path segment is percent-encoded; the drive letter and colon are not.
///
/// # Examples
///
/// ```
/// use pathkit::url::to_file_url;
///
/// assert_eq!(to_file_url("/foo/bar"), "file:///foo/bar");
/// assert_eq!(to_file_url("C:\\My Files\\a#1"), "file:///C:/My%20Files/a%231");
/// assert_eq!(to_file_url("\\\\server\\share\\x"), "file://server/share/x");
/// ```
#[must_use]
pub fn to_file_url(path: &str) -> String {
    if path.is_empty() {
        return format!("{FILE_SCHEME}/");
    }

    if is_drive_path(path) {
        let slashed = path.replace('\\', "/");
        let (drive, rest) = slashed.split_at(2);
        return format!("{FILE_SCHEME}/{drive}{}", encode_segments(rest));
    }

    if classify(path) == PathKind::Unc {
        let slashed = path.replace('\\', "/");
        return format!(
            "{FILE_SCHEME}{}",
            encode_segments(slashed.trim_start_matches('/'))
        );
    }

    if path.starts_with('/') {
        format!("{FILE_SCHEME}{}", encode_segments(path))
    } else {
        format!("{FILE_SCHEME}/{}", encode_segments(path))
    }
}

/// Convert a `file://` URL back into a filesystem path.
///
/// - An empty remainder after the scheme becomes `/`
/// - `/X:/dir` loses its leading slash and becomes `X:/dir`
/// - A remainder starting with `//` is returned as is
/// - Anything else gets a leading `/`, has repeated slashes collapsed and
///   loses a trailing `/` (except for the root itself)
///
/// # Errors
///
/// Returns [`Error::NotFileUrl`] if `url` does not start with `file://`, and
/// [`Error::InvalidEncoding`] if the remainder cannot be percent-decoded.
///
/// # Examples
///
/// ```
/// use pathkit::url::from_file_url;
///
/// assert_eq!(from_file_url("file:///foo/bar").unwrap(), "/foo/bar");
/// assert_eq!(from_file_url("file:///C:/My%20Files").unwrap(), "C:/My Files");
/// assert!(from_file_url("https://example.com").is_err());
/// ```
pub fn from_file_url(url: &str) -> Result<String> {
    let rest = url.strip_prefix(FILE_SCHEME).ok_or(Error::NotFileUrl)?;
    if rest.is_empty() {
        return Ok("/".to_string());
    }

    let decoded = decode_component(rest)?;

    if let Some(unwrapped) = decoded.strip_prefix('/') {
        if drive_letter(unwrapped).is_some() {
            return Ok(unwrapped.to_string());
        }
    }

    if decoded.starts_with("//") {
        return Ok(decoded);
    }

    let mut collapsed = collapse_separators(&decoded, '/');
    if !collapsed.starts_with('/') {
        collapsed.insert(0, '/');
    }
    if collapsed.len() > 1 && collapsed.ends_with('/') {
        collapsed.pop();
    }
    Ok(collapsed)
}
