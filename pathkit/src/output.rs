//! Output formatting for operation results.
//!
//! Results are [`serde_json::Value`]s, so every command shares one pair of
//! formatters: plain text for people and pretty JSON for scripts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Trait for rendering an operation result.
pub trait OutputFormatter {
    /// Render `value` as a string, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    fn format(&self, value: &Value) -> Result<String>;
}

/// Output format selection.
///
/// # Examples
///
/// ```
/// use pathkit::output::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text: strings verbatim, records as `key: value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected text or json)")),
        }
    }
}

/// Formatter for human-readable text.
///
/// Strings print raw, `null` prints nothing, arrays print one element per
/// line and objects print `key: value` lines. Nested values are written as
/// compact JSON.
pub struct TextFormatter;

impl TextFormatter {
    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, value: &Value) -> Result<String> {
        let text = match value {
            Value::Array(items) => items
                .iter()
                .map(Self::scalar)
                .collect::<Vec<_>>()
                .join("\n"),
            Value::Object(map) => map
                .iter()
                .map(|(key, v)| format!("{key}: {}", Self::scalar(v)))
                .collect::<Vec<_>>()
                .join("\n"),
            other => Self::scalar(other),
        };
        Ok(text)
    }
}

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
