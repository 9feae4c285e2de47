//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, JSON argument parsing and output.

use crate::error::CliError;
use pathkit::{Config, ConfigBuilder, OutputFormat};
use serde_json::Value;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Output format override.
    pub format: Option<OutputFormat>,

    /// Working directory override used by `resolve`.
    pub cwd: Option<String>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        cwd: global.cwd.clone(),
        output_format: global.format,
        query_separator: None,
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| match e {
            pathkit::Error::Io(io) => CliError::Io(io),
            other => CliError::Config(other.to_string()),
        })
}

/// Parse a JSON command-line argument.
pub fn parse_json_arg(name: &str, raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw)
        .map_err(|e| CliError::InvalidArguments(format!("{name} is not valid JSON: {e}")))
}

/// Print an operation result in the configured format.
pub fn print_value(value: &Value, config: &Config) -> Result<(), CliError> {
    let text = config.output_format().create_formatter().format(value)?;
    println!("{text}");
    Ok(())
}

/// Load configuration and print `value` with it.
pub fn emit(global: &GlobalOptions, value: Value) -> Result<(), CliError> {
    let config = load_configuration(global)?;
    print_value(&value, &config)
}
