//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigMerger};
///
/// let low = Config { cwd: Some("/low".to_string()), ..Default::default() };
/// let high = Config { cwd: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.cwd, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target. A field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.cwd.is_some() {
            target.cwd.clone_from(&source.cwd);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.query_separator.is_some() {
            target.query_separator.clone_from(&source.query_separator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(vec![]), Config::default());
    }

    #[test]
    fn test_merge_higher_precedence_wins() {
        let user = Config {
            cwd: Some("/user".to_string()),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let project = Config {
            cwd: Some("/project".to_string()),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, user), source(2, project)]);
        assert_eq!(merged.cwd.as_deref(), Some("/project"));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_into_keeps_unset_fields() {
        let mut target = Config {
            query_separator: Some("&".to_string()),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.query_separator.as_deref(), Some("&"));
    }
}
