//! Path resolution against an injected working directory.
//!
//! Resolution never reads process state directly. The working directory is
//! supplied through a [`CwdProvider`], consulted at most once per call, so
//! the same fragments always resolve the same way for the same provider.

use crate::error::{Error, Result};
use crate::path::classify::has_drive_prefix;
use crate::path::normalize::normalize;

/// Source of the working directory used to anchor relative fragments.
///
/// Any `Fn() -> String` closure is a provider, which keeps tests and
/// embedders free of global state.
///
/// # Examples
///
/// ```
/// use pathkit::path::{resolve, CwdProvider};
///
/// let cwd = || "/srv/app".to_string();
/// assert_eq!(resolve(&["static"], &cwd).unwrap(), "/srv/app/static");
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait CwdProvider {
    /// Return the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    fn current_dir(&self) -> Result<String>;
}

impl<F> CwdProvider for F
where
    F: Fn() -> String,
{
    fn current_dir(&self) -> Result<String> {
        Ok(self())
    }
}

/// The working directory of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCwd;

impl CwdProvider for ProcessCwd {
    fn current_dir(&self) -> Result<String> {
        let dir = std::env::current_dir().map_err(Error::WorkingDirectory)?;
        Ok(dir.to_string_lossy().into_owned())
    }
}

/// A working directory captured up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCwd(String);

impl FixedCwd {
    /// Create a provider that always answers `dir`.
    #[must_use]
    pub fn new(dir: impl Into<String>) -> Self {
        Self(dir.into())
    }

    /// The captured directory.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CwdProvider for FixedCwd {
    fn current_dir(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Push a non-empty fragment (with `\` converted) and report whether it is
/// absolute.
fn push_fragment(pieces: &mut Vec<String>, fragment: &str) -> bool {
    if fragment.is_empty() {
        return false;
    }
    let converted = fragment.replace('\\', "/");
    let absolute = converted.starts_with('/') || has_drive_prefix(&converted);
    pieces.push(converted);
    absolute
}

/// Resolve a sequence of path fragments into an absolute path.
///
/// Fragments are consumed right to left until one is absolute (starts with
/// `/` or a drive letter). If none is, the provider's directory is used as
/// the leftmost fragment. The joined result is normalized and is always
/// forced to start with `/`, so a drive path resolves to `/C:/...`.
///
/// An empty fragment list returns the provider's directory with `\`
/// converted to `/` and nothing else.
///
/// # Errors
///
/// Returns an error only if the provider fails.
///
/// # Examples
///
/// ```
/// use pathkit::path::{resolve, FixedCwd};
///
/// let cwd = FixedCwd::new("/home/myself/node");
/// let resolved = resolve(
///     &["wwwroot", "static_files/png/", "../gif/image.gif"],
///     &cwd,
/// ).unwrap();
/// assert_eq!(resolved, "/home/myself/node/wwwroot/static_files/gif/image.gif");
///
/// assert_eq!(resolve(&["/foo/bar", "./baz"], &cwd).unwrap(), "/foo/bar/baz");
/// ```
pub fn resolve<S: AsRef<str>>(fragments: &[S], cwd: &dyn CwdProvider) -> Result<String> {
    if fragments.is_empty() {
        return Ok(cwd.current_dir()?.replace('\\', "/"));
    }

    let mut pieces = Vec::with_capacity(fragments.len() + 1);
    let mut absolute = false;
    for fragment in fragments.iter().rev() {
        absolute = push_fragment(&mut pieces, fragment.as_ref());
        if absolute {
            break;
        }
    }

    if !absolute {
        let dir = cwd.current_dir()?;
        log::debug!("anchoring relative fragments at working directory {dir}");
        push_fragment(&mut pieces, &dir);
    }

    pieces.reverse();
    let normalized = normalize(&pieces.join("/"));

    if normalized.starts_with('/') {
        Ok(normalized)
    } else {
        Ok(normalize(&format!("/{normalized}")))
    }
}

/// Resolves fragments against a configured working directory.
///
/// # Examples
///
/// ```
/// use pathkit::path::{FixedCwd, PathResolver};
///
/// let resolver = PathResolver::new().with_cwd(FixedCwd::new("/work"));
/// assert_eq!(resolver.resolve(&["a", "../b"]).unwrap(), "/work/b");
/// ```
pub struct PathResolver {
    cwd: Box<dyn CwdProvider + Send + Sync>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            cwd: Box::new(ProcessCwd),
        }
    }
}

impl std::fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathResolver").finish_non_exhaustive()
    }
}

impl PathResolver {
    /// Create a resolver anchored at the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor relative fragments at `cwd` instead.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl CwdProvider + Send + Sync + 'static) -> Self {
        self.cwd = Box::new(cwd);
        self
    }

    /// Resolve `fragments`. See [`resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn resolve<S: AsRef<str>>(&self, fragments: &[S]) -> Result<String> {
        resolve(fragments, self.cwd.as_ref())
    }
}
