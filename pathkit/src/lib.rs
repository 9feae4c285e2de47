#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! Lexical path and URL normalization that behaves the same on every host.
//!
//! Paths are plain strings in any of three flavours: POSIX (`/a/b`), Windows
//! drive (`C:\a\b`) and UNC (`\\host\share`). Nothing here touches the
//! filesystem; the only ambient input is the working directory used by
//! [`resolve`](path::resolve), and that is injected through a
//! [`CwdProvider`](path::CwdProvider).
//!
//! ## Core Types
//!
//! - [`path`]: classification, normalization, conversion, resolution
//! - [`url`]: `file://` URLs, URL parsing and query strings
//! - [`dispatch`]: invoke operations by name with JSON arguments
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathkit::path::{normalize, relative, to_posix, to_win32};
//! use pathkit::url::to_file_url;
//!
//! assert_eq!(to_posix("C:\\temp\\foo"), "/c/temp/foo");
//! assert_eq!(to_win32("/c/temp/foo"), "C:\\temp\\foo");
//! assert_eq!(normalize("/a/./b/../c"), "/a/c");
//! assert_eq!(relative("/a/b/c", "/a/d"), "../../d");
//! assert_eq!(to_file_url("C:\\My Files"), "file:///C:/My%20Files");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod url;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use dispatch::{invoke, Operation};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{CwdProvider, FixedCwd, PathKind, PathResolver, ProcessCwd};
pub use crate::url::ParsedUrl;
