//! Compute a relative path.

use crate::error::CliError;
use crate::utils::{emit, GlobalOptions};
use clap::Args;
use pathkit::path::relative;

/// Compute the relative path leading from one path to another.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting path
    pub from: String,

    /// Target path
    pub to: String,
}

impl RelativeCommand {
    /// Execute the relative command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        emit(global, relative(&self.from, &self.to).into())
    }
}
