//! Lexically normalize a path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::path::normalize;

/// Resolve `.` and `..` segments and collapse separators.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    pub path: String,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit(global, normalize(&self.path).into())
    }
}
