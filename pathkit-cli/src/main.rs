//! Main entry point for the pathkit CLI.
//!
//! Every subcommand wraps one library operation; results are printed as
//! text or JSON according to `--format` and the configuration.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let (global, command) = cli.into_parts();

    // Route library `log` records to stderr at the requested verbosity
    let logger = pathkit::init_logger(global.verbose, global.quiet);
    if logger.install().is_err() {
        logger.warn("a logger was already installed");
    }

    let result = match command {
        Command::ToPosix(cmd) => cmd.execute(&global),
        Command::ToWin32(cmd) => cmd.execute(&global),
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Classify(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Relative(cmd) => cmd.execute(&global),
        Command::ToFileUrl(cmd) => cmd.execute(&global),
        Command::FromFileUrl(cmd) => cmd.execute(&global),
        Command::ParseUrl(cmd) => cmd.execute(&global),
        Command::QueryString(cmd) => cmd.execute(&global),
        Command::Call(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
