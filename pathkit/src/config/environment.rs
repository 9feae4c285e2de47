//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHKIT_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::output::OutputFormat;
use crate::error::{Error, Result};

/// Overrides the working directory used by `resolve`.
pub const CWD_ENV: &str = "PATHKIT_CWD";
/// Overrides the output format (`text` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "PATHKIT_OUTPUT_FORMAT";
/// Overrides the query string separator.
pub const QUERY_SEPARATOR_ENV: &str = "PATHKIT_QUERY_SEPARATOR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Unset variables leave the corresponding field untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHKIT_OUTPUT_FORMAT` is not a known format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(cwd) = env::var(CWD_ENV) {
            config.cwd = Some(cwd);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        if let Ok(separator) = env::var(QUERY_SEPARATOR_ENV) {
            config.query_separator = Some(separator);
        }

        Ok(())
    }

    fn parse_output_format(value: &str) -> Result<OutputFormat> {
        value
            .parse()
            .map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })
    }
}
