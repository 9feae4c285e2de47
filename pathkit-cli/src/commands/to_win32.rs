//! Convert a path to Windows form.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::path::to_win32;

/// Convert a path to Windows form.
#[derive(Args)]
pub struct ToWin32Command {
    /// Path to convert
    pub path: String,
}

impl ToWin32Command {
    /// Execute the to-win32 command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit(global, to_win32(&self.path).into())
    }
}
