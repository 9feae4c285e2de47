//! Path flavor detection.

use std::fmt;

/// The surface syntax a raw path string uses.
///
/// # Examples
///
/// ```
/// use pathkit::path::{classify, PathKind};
///
/// assert_eq!(classify("C:\\temp"), PathKind::WindowsDrive);
/// assert_eq!(classify("\\\\server\\share"), PathKind::Unc);
/// assert_eq!(classify("/usr/lib"), PathKind::PosixAbsolute);
/// assert_eq!(classify("src/main.rs"), PathKind::Relative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Starts with a single `/`.
    PosixAbsolute,
    /// Starts with a drive letter and colon, e.g. `C:`.
    WindowsDrive,
    /// Starts with two or more separators, e.g. `//host/share`.
    Unc,
    /// Anything else.
    Relative,
}

impl PathKind {
    /// Whether paths of this kind are anchored at a root.
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        !matches!(self, Self::Relative)
    }

    /// Stable identifier used in CLI and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PosixAbsolute => "posix-absolute",
            Self::WindowsDrive => "windows-drive",
            Self::Unc => "unc",
            Self::Relative => "relative",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether `path` begins with a drive letter followed by a colon.
///
/// The letter is matched case-insensitively.
#[must_use]
pub fn has_drive_prefix(path: &str) -> bool {
    drive_letter(path).is_some()
}

/// Return the drive letter of `path`, if it starts with `X:`.
#[must_use]
pub fn drive_letter(path: &str) -> Option<char> {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Classify the flavor of a raw path string.
///
/// Drive detection runs before UNC detection, so `C://x` is a drive path.
/// Never fails.
#[must_use]
pub fn classify(path: &str) -> PathKind {
    if has_drive_prefix(path) {
        return PathKind::WindowsDrive;
    }

    let leading = path.chars().take_while(|&c| is_separator(c)).count();
    match leading {
        0 => PathKind::Relative,
        1 => PathKind::PosixAbsolute,
        _ => PathKind::Unc,
    }
}
