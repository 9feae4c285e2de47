//! Build a query string.

use crate::error::CliError;
use crate::utils::{load_configuration, parse_json_arg, print_value, GlobalOptions};
use clap::Args;
use pathkit::url::query_string;

/// Build a query string from a JSON object.
///
/// Anything other than a non-empty object prints an empty line.
#[derive(Args)]
pub struct QueryStringCommand {
    /// JSON object of query parameters, e.g. '{"a": "1"}'
    pub query: String,

    /// Separator placed before the first pair (defaults to the configured one)
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,
}

impl QueryStringCommand {
    /// Execute the query-string command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let query = parse_json_arg("query", &self.query)?;
        let config = load_configuration(global)?;
        let separator = self
            .separator
            .as_deref()
            .unwrap_or_else(|| config.query_separator());
        print_value(&query_string(&query, separator).into(), &config)
    }
}
