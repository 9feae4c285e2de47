//! Report the kind of a path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::path::classify;

/// Print `posix-absolute`, `windows-drive`, `unc` or `relative`.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Path to classify
    pub path: String,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit(global, classify(&self.path).as_str().into())
    }
}
