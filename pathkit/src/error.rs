//! Error types for the pathkit library.
//!
//! Path transforms themselves never fail; errors come from three places:
//! argument type checks at the dynamic dispatch boundary, malformed URLs or
//! percent-encoding, and the environment (working directory, configuration).

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/foo/bar".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument had the wrong type.
    #[error("{argument} must be a {expected}")]
    InvalidType {
        /// Name of the offending argument.
        argument: String,
        /// The expected type.
        expected: &'static str,
    },

    /// A URL passed to `from_file_url` did not use the `file://` scheme.
    #[error("URL must be a file URL")]
    NotFileUrl,

    /// Percent-decoding failed.
    #[error("Invalid URL encoding")]
    InvalidEncoding,

    /// A URL could not be parsed.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl {
        /// The input that failed to parse.
        url: String,
        /// The reason parsing failed.
        reason: String,
    },

    /// No operation with this name exists.
    #[error("unknown operation: {name}")]
    UnknownOperation {
        /// The requested operation name.
        name: String,
    },

    /// The working directory could not be determined.
    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument type or unknown operation. Never recoverable.
    Type,
    /// Malformed URL scheme, URL syntax, or percent-encoding.
    Format,
    /// Working directory, I/O, serialization, or configuration failure.
    Environment,
}

impl Error {
    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{Error, ErrorKind};
    ///
    /// assert_eq!(Error::NotFileUrl.kind(), ErrorKind::Format);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } | Self::UnknownOperation { .. } => ErrorKind::Type,
            Self::NotFileUrl | Self::InvalidEncoding | Self::InvalidUrl { .. } => {
                ErrorKind::Format
            }
            Self::WorkingDirectory(_)
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::Serialization(_)
            | Self::Validation { .. } => ErrorKind::Environment,
        }
    }

    /// Check if error is an argument type error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::InvalidType { argument: "path".into(), expected: "string" };
    /// assert!(err.is_type_error());
    /// ```
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Check if error is a URL format error.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    pub(crate) fn invalid_type(argument: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            argument: argument.into(),
            expected,
        }
    }
}
