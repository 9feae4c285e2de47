//! Split a URL into its components.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::url::parse_url;

/// Split a URL into protocol, host, port, path, query and fragment.
#[derive(Args)]
pub struct ParseUrlCommand {
    /// URL to parse
    pub url: String,
}

impl ParseUrlCommand {
    /// Execute the parse-url command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let parsed = parse_url(&self.url)?;
        let value = serde_json::to_value(parsed).map_err(pathkit::Error::from)?;
        emit(global, value)
    }
}
