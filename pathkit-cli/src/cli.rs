//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CallCommand, ClassifyCommand, CompletionsCommand, FromFileUrlCommand, NormalizeCommand,
    ParseUrlCommand, QueryStringCommand, RelativeCommand, ResolveCommand, ToFileUrlCommand,
    ToPosixCommand, ToWin32Command,
};
use clap::{Parser, Subcommand};
use pathkit::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for normalizing and converting paths and file URLs.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(
    version,
    about = "Normalize, convert and resolve POSIX, Windows and file:// paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true, env = "PATHKIT_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Working directory used to anchor relative fragments
    #[arg(long, value_name = "DIR", global = true, env = "PATHKIT_CWD")]
    pub cwd: Option<String>,

    /// Read configuration from this file as well
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a path to POSIX form
    ToPosix(ToPosixCommand),

    /// Convert a path to Windows form
    ToWin32(ToWin32Command),

    /// Resolve `.` and `..` segments lexically
    Normalize(NormalizeCommand),

    /// Report whether a path is POSIX-absolute, drive, UNC or relative
    Classify(ClassifyCommand),

    /// Resolve fragments into an absolute path
    Resolve(ResolveCommand),

    /// Compute the relative path between two paths
    Relative(RelativeCommand),

    /// Convert a path to a file:// URL
    ToFileUrl(ToFileUrlCommand),

    /// Convert a file:// URL to a path
    FromFileUrl(FromFileUrlCommand),

    /// Split a URL into its components
    ParseUrl(ParseUrlCommand),

    /// Build a query string from a JSON object
    QueryString(QueryStringCommand),

    /// Invoke an operation by name with JSON arguments
    Call(CallCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Cli {
    /// Split the global flags from the command.
    pub fn into_parts(self) -> (crate::utils::GlobalOptions, Command) {
        let global = crate::utils::GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            format: self.format,
            cwd: self.cwd,
            config: self.config,
        };
        (global, self.command)
    }
}
