//! URL helpers: `file://` conversion, parsing and query strings.
//!
//! # Examples
//!
//! ```
//! use pathkit::url::{from_file_url, query_string, to_file_url, DEFAULT_QUERY_SEPARATOR};
//! use serde_json::json;
//!
//! let url = to_file_url("/srv/my site/index.html");
//! assert_eq!(url, "file:///srv/my%20site/index.html");
//! assert_eq!(from_file_url(&url).unwrap(), "/srv/my site/index.html");
//!
//! assert_eq!(query_string(&json!({"page": 2}), DEFAULT_QUERY_SEPARATOR), "?page=2");
//! ```

pub mod encoding;
pub mod file_url;
pub mod parse;
pub mod query;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use file_url::{from_file_url, to_file_url, FILE_SCHEME};
pub use parse::{parse_url, ParsedUrl};
pub use query::{query_string, DEFAULT_QUERY_SEPARATOR};
