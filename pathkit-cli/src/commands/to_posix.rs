//! Convert a path to POSIX form.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::path::to_posix;

/// Convert a path to POSIX form.
#[derive(Args)]
pub struct ToPosixCommand {
    /// Path to convert
    pub path: String,
}

impl ToPosixCommand {
    /// Execute the to-posix command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit(global, to_posix(&self.path).into())
    }
}
