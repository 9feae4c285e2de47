//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigValidator};
///
/// let config = Config { query_separator: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `cwd` or `query_separator` is set to
    /// an empty string.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(cwd) = &config.cwd {
            Self::validate_non_empty("cwd", cwd)?;
        }

        if let Some(separator) = &config.query_separator {
            Self::validate_non_empty("query_separator", separator)?;
        }

        Ok(())
    }

    fn validate_non_empty(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }
        Ok(())
    }
}
