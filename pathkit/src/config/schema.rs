//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::path::{CwdProvider, FixedCwd, ProcessCwd};
use crate::url::DEFAULT_QUERY_SEPARATOR;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("cwd: /srv\noutput_format: json\n").unwrap();
/// assert_eq!(config.cwd.as_deref(), Some("/srv"));
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert_eq!(config.query_separator(), "?");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Working directory used to anchor relative fragments in `resolve`.
    pub cwd: Option<String>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,

    /// Separator placed before generated query strings.
    pub query_separator: Option<String>,
}

impl Config {
    /// The configured output format, defaulting to text.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// The configured query separator, defaulting to `?`.
    #[must_use]
    pub fn query_separator(&self) -> &str {
        self.query_separator
            .as_deref()
            .unwrap_or(DEFAULT_QUERY_SEPARATOR)
    }

    /// The working-directory provider this configuration selects.
    ///
    /// A configured `cwd` is captured as a [`FixedCwd`]; otherwise the
    /// process working directory is used.
    #[must_use]
    pub fn cwd_provider(&self) -> Box<dyn CwdProvider + Send + Sync> {
        match &self.cwd {
            Some(dir) => Box::new(FixedCwd::new(dir.clone())),
            None => Box::new(ProcessCwd),
        }
    }
}
