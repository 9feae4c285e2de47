//! CLI command implementations.
//!
//! One module per subcommand:
//! - `to_posix`, `to_win32`: surface syntax conversion
//! - `normalize`, `classify`: single-path inspection
//! - `resolve`, `relative`: multi-path computation
//! - `to_file_url`, `from_file_url`, `parse_url`, `query_string`: URLs
//! - `call`: dynamic invocation with JSON arguments
//! - `completions`: shell completion scripts

pub mod call;
pub mod classify;
pub mod completions;
pub mod from_file_url;
pub mod normalize;
pub mod parse_url;
pub mod query_string;
pub mod relative;
pub mod resolve;
pub mod to_file_url;
pub mod to_posix;
pub mod to_win32;

pub use call::CallCommand;
pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use from_file_url::FromFileUrlCommand;
pub use normalize::NormalizeCommand;
pub use parse_url::ParseUrlCommand;
pub use query_string::QueryStringCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use to_file_url::ToFileUrlCommand;
pub use to_posix::ToPosixCommand;
pub use to_win32::ToWin32Command;
