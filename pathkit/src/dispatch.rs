//! Invoke operations by name with JSON arguments.
//!
//! The typed API in [`crate::path`] and [`crate::url`] cannot receive a
//! non-string argument. Callers that assemble calls at runtime (scripts,
//! the `pathkit call` command) go through [`invoke`], which checks argument
//! types and reports [`Error::InvalidType`] for anything that does not fit.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::path::{self, CwdProvider};
use crate::url;

/// A named library operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`path::to_posix`]
    ToPosix,
    /// [`path::to_win32`]
    ToWin32,
    /// [`path::normalize`]
    Normalize,
    /// [`path::classify`]
    Classify,
    /// [`path::resolve`]
    Resolve,
    /// [`path::relative`]
    Relative,
    /// [`url::to_file_url`]
    ToFileUrl,
    /// [`url::from_file_url`]
    FromFileUrl,
    /// [`url::parse_url`]
    ParseUrl,
    /// [`url::query_string`]
    QueryString,
}

impl Operation {
    /// Every operation, in documentation order.
    pub const ALL: [Self; 10] = [
        Self::ToPosix,
        Self::ToWin32,
        Self::Normalize,
        Self::Classify,
        Self::Resolve,
        Self::Relative,
        Self::ToFileUrl,
        Self::FromFileUrl,
        Self::ParseUrl,
        Self::QueryString,
    ];

    /// The camelCase name of this operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToPosix => "toPosix",
            Self::ToWin32 => "toWin32",
            Self::Normalize => "normalize",
            Self::Classify => "classify",
            Self::Resolve => "resolve",
            Self::Relative => "relative",
            Self::ToFileUrl => "toFileUrl",
            Self::FromFileUrl => "fromFileUrl",
            Self::ParseUrl => "parseUrl",
            Self::QueryString => "queryString",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Accepts the camelCase name or its kebab-case spelling.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::dispatch::Operation;
    ///
    /// assert_eq!("toPosix".parse::<Operation>().unwrap(), Operation::ToPosix);
    /// assert_eq!("from-file-url".parse::<Operation>().unwrap(), Operation::FromFileUrl);
    /// assert!("rm-rf".parse::<Operation>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|op| op.name().to_ascii_lowercase() == folded)
            .ok_or_else(|| Error::UnknownOperation {
                name: s.to_string(),
            })
    }
}

fn string_arg<'a>(args: &'a [Value], index: usize, name: &str) -> Result<&'a str> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(Error::invalid_type(name, "string")),
    }
}

/// Run `op` with dynamically typed arguments.
///
/// Every operation except `queryString` requires string arguments in the
/// documented order; `resolve` takes any number of them. `queryString`
/// accepts anything as its first argument and an optional string
/// separator, and never fails.
///
/// # Errors
///
/// Returns [`Error::InvalidType`] when an argument is missing or not a
/// string, and otherwise whatever error the operation itself reports.
///
/// # Examples
///
/// ```
/// use pathkit::dispatch::{invoke, Operation};
/// use pathkit::path::FixedCwd;
/// use serde_json::json;
///
/// let cwd = FixedCwd::new("/work");
/// let out = invoke(Operation::ToPosix, &[json!("C:\\temp")], &cwd).unwrap();
/// assert_eq!(out, json!("/c/temp"));
///
/// let err = invoke(Operation::ToPosix, &[json!(42)], &cwd).unwrap_err();
/// assert!(err.is_type_error());
/// ```
pub fn invoke(op: Operation, args: &[Value], cwd: &dyn CwdProvider) -> Result<Value> {
    log::debug!("invoking {op} with {} argument(s)", args.len());

    let result = match op {
        Operation::ToPosix => Value::from(path::to_posix(string_arg(args, 0, "path")?)),
        Operation::ToWin32 => Value::from(path::to_win32(string_arg(args, 0, "path")?)),
        Operation::Normalize => Value::from(path::normalize(string_arg(args, 0, "path")?)),
        Operation::Classify => {
            Value::from(path::classify(string_arg(args, 0, "path")?).as_str())
        }
        Operation::Resolve => {
            let fragments = (0..args.len())
                .map(|i| string_arg(args, i, &format!("fragments[{i}]")))
                .collect::<Result<Vec<_>>>()?;
            Value::from(path::resolve(&fragments, cwd)?)
        }
        Operation::Relative => {
            let from = string_arg(args, 0, "from")?;
            let to = string_arg(args, 1, "to")?;
            Value::from(path::relative(from, to))
        }
        Operation::ToFileUrl => Value::from(url::to_file_url(string_arg(args, 0, "path")?)),
        Operation::FromFileUrl => Value::from(url::from_file_url(string_arg(args, 0, "url")?)?),
        Operation::ParseUrl => serde_json::to_value(url::parse_url(string_arg(args, 0, "url")?)?)?,
        Operation::QueryString => {
            let query = args.first().unwrap_or(&Value::Null);
            let separator = match args.get(1) {
                Some(Value::String(s)) => s.as_str(),
                _ => url::DEFAULT_QUERY_SEPARATOR,
            };
            Value::from(url::query_string(query, separator))
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::FixedCwd;
    use serde_json::json;

    fn call(op: Operation, args: Value) -> Result<Value> {
        let args = match args {
            Value::Array(items) => items,
            other => vec![other],
        };
        invoke(op, &args, &FixedCwd::new("/cwd"))
    }

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_operation_kebab_and_snake_case() {
        assert_eq!("to-win32".parse::<Operation>().unwrap(), Operation::ToWin32);
        assert_eq!("parse_url".parse::<Operation>().unwrap(), Operation::ParseUrl);
        assert_eq!("QUERYSTRING".parse::<Operation>().unwrap(), Operation::QueryString);
    }

    #[test]
    fn test_unknown_operation() {
        let err = "explode".parse::<Operation>().unwrap_err();
        assert!(matches!(err, Error::UnknownOperation { ref name } if name == "explode"));
    }

    #[test]
    fn test_invoke_string_operations() {
        assert_eq!(call(Operation::ToWin32, json!(["/c/x"])).unwrap(), json!("C:\\x"));
        assert_eq!(call(Operation::Normalize, json!(["/a/../b"])).unwrap(), json!("/b"));
        assert_eq!(call(Operation::Classify, json!(["//h/s"])).unwrap(), json!("unc"));
        assert_eq!(
            call(Operation::ToFileUrl, json!(["/foo/bar"])).unwrap(),
            json!("file:///foo/bar")
        );
        assert_eq!(
            call(Operation::FromFileUrl, json!(["file:///foo/bar"])).unwrap(),
            json!("/foo/bar")
        );
    }

    #[test]
    fn test_invoke_resolve_uses_cwd() {
        assert_eq!(call(Operation::Resolve, json!(["a", "b"])).unwrap(), json!("/cwd/a/b"));
        assert_eq!(call(Operation::Resolve, json!([])).unwrap(), json!("/cwd"));
    }

    #[test]
    fn test_invoke_relative() {
        assert_eq!(
            call(
                Operation::Relative,
                json!(["/data/orandea/test/aaa", "/data/orandea/impl/bbb"])
            )
            .unwrap(),
            json!("../../impl/bbb")
        );
    }

    #[test]
    fn test_invoke_type_errors() {
        let err = call(Operation::ToPosix, json!([null])).unwrap_err();
        assert_eq!(err.to_string(), "path must be a string");

        let err = call(Operation::Relative, json!(["/a", 5])).unwrap_err();
        assert_eq!(err.to_string(), "to must be a string");

        let err = call(Operation::Resolve, json!(["a", true])).unwrap_err();
        assert_eq!(err.to_string(), "fragments[1] must be a string");

        let err = call(Operation::FromFileUrl, json!([])).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_invoke_format_errors_pass_through() {
        let err = call(Operation::FromFileUrl, json!(["http://x"])).unwrap_err();
        assert!(matches!(err, Error::NotFileUrl));

        let err = call(Operation::ParseUrl, json!([""])).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_invoke_parse_url_returns_object() {
        let out = call(Operation::ParseUrl, json!(["https://example.com:8080/x?y#z"])).unwrap();
        assert_eq!(out["hostname"], "example.com");
        assert_eq!(out["port"], 8080);
        assert_eq!(out["search"], "?y");
    }

    #[test]
    fn test_invoke_query_string_never_fails() {
        assert_eq!(
            call(Operation::QueryString, json!([{"a": "1", "b": "2"}])).unwrap(),
            json!("?a=1&b=2")
        );
        assert_eq!(call(Operation::QueryString, json!([])).unwrap(), json!(""));
        assert_eq!(call(Operation::QueryString, json!([null])).unwrap(), json!(""));
        assert_eq!(
            call(Operation::QueryString, json!([{"a": 1}, "#"])).unwrap(),
            json!("#a=1")
        );
        assert_eq!(
            call(Operation::QueryString, json!([{"a": 1}, 7])).unwrap(),
            json!("?a=1")
        );
    }
}
