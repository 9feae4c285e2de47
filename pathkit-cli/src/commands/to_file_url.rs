//! Convert a path to a file URL.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::url::to_file_url;

/// Convert a path to a `file://` URL.
#[derive(Args)]
pub struct ToFileUrlCommand {
    /// Path to convert
    pub path: String,
}

impl ToFileUrlCommand {
    /// Execute the to-file-url command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit(global, to_file_url(&self.path).into())
    }
}
