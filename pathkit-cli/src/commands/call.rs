//! Invoke an operation by name with JSON arguments.

use crate::error::CliError;
use crate::utils::{load_configuration, parse_json_arg, print_value, GlobalOptions};
use clap::Args;
use pathkit::dispatch::{invoke, Operation};
use serde_json::Value;

/// Invoke an operation by name with a JSON array of arguments.
///
/// Unlike the dedicated subcommands, arguments keep their JSON types, so a
/// non-string argument is reported as a type error (exit code 4).
#[derive(Args)]
pub struct CallCommand {
    /// Operation name, e.g. toPosix or to-posix
    pub operation: String,

    /// JSON array of arguments, e.g. '["C:\\temp"]'
    #[arg(default_value = "[]")]
    pub args: String,
}

impl CallCommand {
    /// Execute the call command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let op: Operation = self.operation.parse()?;
        let mut args = match parse_json_arg("args", &self.args)? {
            Value::Array(items) => items,
            _ => {
                return Err(CliError::InvalidArguments(
                    "args must be a JSON array".to_string(),
                ))
            }
        };

        let config = load_configuration(global)?;
        if op == Operation::QueryString && args.len() < 2 {
            args.resize(1, Value::Null);
            args.push(config.query_separator().into());
        }

        let cwd = config.cwd_provider();
        let result = invoke(op, &args, cwd.as_ref())?;
        print_value(&result, &config)
    }
}
