//! Build script for pathkit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, convert and resolve POSIX, Windows and file:// paths")
        .long_about(
            "Command-line tool for lexical path normalization, POSIX/Windows conversion, \
             path resolution and file URL handling",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text or json)")
                .value_name("FORMAT")
                .global(true)
                .env("PATHKIT_OUTPUT_FORMAT"),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Working directory used to anchor relative fragments")
                .value_name("DIR")
                .global(true)
                .env("PATHKIT_CWD"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file as well")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("to-posix").about("Convert a path to POSIX form"),
            Command::new("to-win32").about("Convert a path to Windows form"),
            Command::new("normalize").about("Resolve `.` and `..` segments lexically"),
            Command::new("classify")
                .about("Report whether a path is POSIX-absolute, drive, UNC or relative"),
            Command::new("resolve")
                .about("Resolve fragments into an absolute path")
                .long_about(
                    "Resolve fragments right to left against the working directory; \
                     the result always starts with /",
                ),
            Command::new("relative").about("Compute the relative path between two paths"),
            Command::new("to-file-url").about("Convert a path to a file:// URL"),
            Command::new("from-file-url").about("Convert a file:// URL to a path"),
            Command::new("parse-url").about("Split a URL into its components"),
            Command::new("query-string").about("Build a query string from a JSON object"),
            Command::new("call")
                .about("Invoke an operation by name with JSON arguments")
                .long_about(
                    "Invoke an operation by name with a JSON array of arguments; \
                     wrongly typed arguments exit with code 4",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = std::env::var("OUT_DIR").map_err(io::Error::other)?;
    let man_dir = PathBuf::from(out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("pathkit.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
