//! Percent-encoding with `encodeURIComponent` semantics.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};

/// Bytes escaped in a URL component: everything but ASCII alphanumerics and
/// `-_.!~*'()`.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URL component.
///
/// # Examples
///
/// ```
/// use pathkit::url::encoding::encode_component;
///
/// assert_eq!(encode_component("a b?c#d"), "a%20b%3Fc%23d");
/// assert_eq!(encode_component("café"), "caf%C3%A9");
/// ```
#[must_use]
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Percent-encode each `/`-separated segment of `path`, keeping the slashes.
#[must_use]
pub fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Check that every `%` starts a two-digit hex escape.
fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Percent-decode a URL component.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if a `%` is not followed by two hex
/// digits or the decoded bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use pathkit::url::encoding::decode_component;
///
/// assert_eq!(decode_component("a%20b").unwrap(), "a b");
/// assert!(decode_component("%E0%A4%A").is_err());
/// assert!(decode_component("%FF").is_err());
/// ```
pub fn decode_component(s: &str) -> Result<String> {
    if !has_valid_escapes(s) {
        log::debug!("malformed percent escape in {s:?}");
        return Err(Error::InvalidEncoding);
    }

    percent_decode_str(s)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| {
            log::debug!("percent-decoded bytes of {s:?} are not UTF-8: {e}");
            Error::InvalidEncoding
        })
}
