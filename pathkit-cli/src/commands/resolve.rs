//! Resolve path fragments into an absolute path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_value, GlobalOptions};
use clap::Args;
use pathkit::path::resolve;

/// Resolve fragments right to left against the working directory.
///
/// The working directory comes from `--cwd`, `PATHKIT_CWD` or the
/// configuration files, and falls back to the process directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path fragments, leftmost first
    pub fragments: Vec<String>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let cwd = config.cwd_provider();
        let resolved = resolve(&self.fragments, cwd.as_ref())?;
        print_value(&resolved.into(), &config)
    }
}
