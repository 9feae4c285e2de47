//! Lexical path handling for POSIX, Windows drive and UNC paths.
//!
//! Every function in this module is a pure string transformation: no
//! filesystem access, no shared state, safe to call from any thread.
//!
//! # Key Concepts
//!
//! ## Classification
//!
//! [`classify`] reports which surface syntax a raw string uses. Drive
//! detection (`C:`) runs before UNC detection (`//host`).
//!
//! ## Normalization
//!
//! [`normalize`] collapses separators, drops `.` segments and resolves `..`
//! lexically. Dangling `..` at the root of an absolute path is dropped.
//!
//! ## Conversion
//!
//! [`to_posix`] and [`to_win32`] rewrite between `/c/temp` and `C:\temp`
//! forms, keeping UNC prefixes intact.
//!
//! ## Resolution
//!
//! [`resolve`] joins fragments right to left against a working directory
//! supplied by a [`CwdProvider`], and [`relative`] computes the lexical path
//! between two locations.
//!
//! # Examples
//!
//! ```
//! use pathkit::path::{relative, resolve, to_posix, to_win32, FixedCwd};
//!
//! assert_eq!(to_posix("C:\\temp\\foo\\bar"), "/c/temp/foo/bar");
//! assert_eq!(to_win32("/c/temp/foo/bar"), "C:\\temp\\foo\\bar");
//!
//! let cwd = FixedCwd::new("/data");
//! let target = resolve(&["orandea/impl/bbb"], &cwd).unwrap();
//! assert_eq!(relative("/data/orandea/test/aaa", &target), "../../impl/bbb");
//! ```

pub mod classify;
pub mod convert;
pub mod normalize;
pub mod relative;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use classify::{classify, has_drive_prefix, PathKind};
pub use convert::{to_posix, to_win32};
pub use normalize::normalize;
pub use relative::relative;
pub use resolver::{resolve, CwdProvider, FixedCwd, PathResolver, ProcessCwd};
