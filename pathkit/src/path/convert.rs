//! Conversion between POSIX and Windows surface syntax.
//!
//! Both converters are purely lexical: they never resolve `.` or `..` and
//! never consult the filesystem. Each is idempotent.

use super::classify::drive_letter;

/// Collapse every run of `sep` in `s` to a single `sep`.
pub(crate) fn collapse_separators(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_was_sep = false;

    for c in s.chars() {
        let is_sep = c == sep;
        if !(is_sep && previous_was_sep) {
            out.push(c);
        }
        previous_was_sep = is_sep;
    }

    out
}

/// Convert a path to POSIX surface syntax.
///
/// - The empty string becomes `.`
/// - A leading `X:` drive becomes `/x` (lower-cased)
/// - Every `\` becomes `/`
/// - Two or more leading separators (UNC) become exactly `//`
/// - Runs of `/` collapse and a trailing `/` is stripped, except for `/`
///
/// # Examples
///
/// ```
/// use pathkit::path::to_posix;
///
/// assert_eq!(to_posix("C:\\temp\\foo\\bar"), "/c/temp/foo/bar");
/// assert_eq!(to_posix("\\\\server\\\\share\\"), "//server/share");
/// assert_eq!(to_posix(""), ".");
/// ```
#[must_use]
pub fn to_posix(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rewritten = match drive_letter(path) {
        Some(letter) => format!("/{}{}", letter.to_ascii_lowercase(), &path[2..]),
        None => path.to_string(),
    };
    let slashed = rewritten.replace('\\', "/");

    let body = slashed.trim_start_matches('/');
    let leading = slashed.len() - body.len();
    let body = collapse_separators(body, '/');

    let mut out = match leading {
        0 => body,
        1 => format!("/{body}"),
        _ => format!("//{body}"),
    };

    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Rewrite a leading `\x\` (or a lone `\x`) into `X:\`.
fn expand_drive_segment(path: String) -> String {
    let mut chars = path.chars();
    let (Some('\\'), Some(letter)) = (chars.next(), chars.next()) else {
        return path;
    };
    if !letter.is_ascii_alphabetic() {
        return path;
    }

    match chars.next() {
        None => format!("{}:\\", letter.to_ascii_uppercase()),
        Some('\\') => format!("{}:\\{}", letter.to_ascii_uppercase(), &path[3..]),
        Some(_) => path,
    }
}

fn is_drive_root(path: &str) -> bool {
    path.len() == 3 && drive_letter(path).is_some() && path.ends_with('\\')
}

/// Convert a path to Windows surface syntax.
///
/// - The empty string becomes `.`
/// - Every `/` becomes `\`
/// - A UNC prefix (exactly `\\`, not followed by a third `\`) is kept
/// - Runs of `\` collapse
/// - A leading `\x\` becomes `X:\` (upper-cased)
/// - A trailing `\` is stripped, except in `X:\` and the lone root `\`
///
/// # Examples
///
/// ```
/// use pathkit::path::to_win32;
///
/// assert_eq!(to_win32("/c/temp/foo/bar"), "C:\\temp\\foo\\bar");
/// assert_eq!(to_win32("//server/share/"), "\\\\server\\share");
/// assert_eq!(to_win32("/d/"), "D:\\");
/// ```
#[must_use]
pub fn to_win32(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let backslashed = path.replace('/', "\\");
    let is_unc = backslashed
        .strip_prefix("\\\\")
        .is_some_and(|rest| !rest.starts_with('\\'));

    let mut out = if is_unc {
        format!("\\\\{}", collapse_separators(&backslashed[2..], '\\'))
    } else {
        expand_drive_segment(collapse_separators(&backslashed, '\\'))
    };

    if out.len() > 1 && out.ends_with('\\') && !is_drive_root(&out) {
        out.pop();
    }
    out
}
