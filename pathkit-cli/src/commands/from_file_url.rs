//! Convert a file URL to a path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::url::from_file_url;

/// Convert a `file://` URL to a path.
#[derive(Args)]
pub struct FromFileUrlCommand {
    /// URL to convert
    pub url: String,
}

impl FromFileUrlCommand {
    /// Execute the from-file-url command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = from_file_url(&self.url)?;
        emit(global, path.into())
    }
}
