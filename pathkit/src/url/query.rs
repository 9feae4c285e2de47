//! Query string construction.

use serde_json::Value;

use crate::url::encoding::encode_component;

/// Separator placed before the first query pair unless told otherwise.
pub const DEFAULT_QUERY_SEPARATOR: &str = "?";

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Build a query string from a JSON object.
///
/// Keys and values are percent-encoded and emitted in insertion order,
/// joined by `&` and prefixed with `separator`. Scalar values are rendered
/// as text; arrays and nested objects are skipped.
///
/// This never fails: anything that is not a non-empty object yields the
/// empty string.
///
/// # Examples
///
/// ```
/// use pathkit::url::{query_string, DEFAULT_QUERY_SEPARATOR};
/// use serde_json::json;
///
/// assert_eq!(query_string(&json!({"a": "1", "b": 2}), DEFAULT_QUERY_SEPARATOR), "?a=1&b=2");
/// assert_eq!(query_string(&json!(null), DEFAULT_QUERY_SEPARATOR), "");
/// assert_eq!(query_string(&json!({"q": "a b"}), "&"), "&q=a%20b");
/// ```
#[must_use]
pub fn query_string(query: &Value, separator: &str) -> String {
    let Value::Object(map) = query else {
        return String::new();
    };

    let pairs: Vec<String> = map
        .iter()
        .filter_map(|(key, value)| {
            render_value(value)
                .map(|v| format!("{}={}", encode_component(key), encode_component(&v)))
        })
        .collect();

    if pairs.is_empty() {
        return String::new();
    }
    format!("{separator}{}", pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_string_basic() {
        assert_eq!(
            query_string(&json!({"a": "1", "b": "2"}), DEFAULT_QUERY_SEPARATOR),
            "?a=1&b=2"
        );
    }

    #[test]
    fn test_query_string_preserves_insertion_order() {
        assert_eq!(
            query_string(&json!({"z": 1, "a": 2}), DEFAULT_QUERY_SEPARATOR),
            "?z=1&a=2"
        );
    }

    #[test]
    fn test_query_string_numbers_and_scalars() {
        assert_eq!(
            query_string(
                &json!({"n": 1.5, "t": true, "none": null}),
                DEFAULT_QUERY_SEPARATOR
            ),
            "?n=1.5&t=true&none=null"
        );
    }

    #[test]
    fn test_query_string_encodes() {
        assert_eq!(
            query_string(&json!({"a b": "c&d=e"}), DEFAULT_QUERY_SEPARATOR),
            "?a%20b=c%26d%3De"
        );
    }

    #[test]
    fn test_query_string_custom_separator() {
        assert_eq!(query_string(&json!({"a": 1}), "&"), "&a=1");
        assert_eq!(query_string(&json!({"a": 1}), ""), "a=1");
    }

    #[test]
    fn test_query_string_non_objects_are_empty() {
        assert_eq!(query_string(&Value::Null, DEFAULT_QUERY_SEPARATOR), "");
        assert_eq!(query_string(&json!("a=1"), DEFAULT_QUERY_SEPARATOR), "");
        assert_eq!(query_string(&json!([1, 2]), DEFAULT_QUERY_SEPARATOR), "");
        assert_eq!(query_string(&json!(42), DEFAULT_QUERY_SEPARATOR), "");
    }

    #[test]
    fn test_query_string_empty_object() {
        assert_eq!(query_string(&json!({}), DEFAULT_QUERY_SEPARATOR), "");
    }

    #[test]
    fn test_query_string_skips_compound_values() {
        assert_eq!(
            query_string(&json!({"a": [1], "b": {"c": 1}, "d": "x"}), DEFAULT_QUERY_SEPARATOR),
            "?d=x"
        );
        assert_eq!(
            query_string(&json!({"a": [1]}), DEFAULT_QUERY_SEPARATOR),
            ""
        );
    }
}
