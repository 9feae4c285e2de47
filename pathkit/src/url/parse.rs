//! Structured URL parsing.

use serde::Serialize;
use ::url::Url;

use crate::error::{Error, Result};
use crate::url::encoding::decode_component;

/// The components of a parsed URL.
///
/// Field names and conventions follow the WHATWG `URL` interface: the
/// protocol keeps its trailing `:`, `search` and `hash` keep their `?`/`#`
/// prefix or are empty, and a scheme's default port is reported as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUrl {
    /// Scheme with trailing colon, e.g. `https:`.
    pub protocol: String,
    /// Host name, empty for hostless URLs.
    pub hostname: String,
    /// Explicit non-default port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Percent-decoded path.
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
    /// Percent-decoded user name, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Percent-decoded password, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn prefixed(prefix: char, part: Option<&str>) -> String {
    match part {
        Some(p) if !p.is_empty() => format!("{prefix}{p}"),
        _ => String::new(),
    }
}

fn decode_non_empty(part: Option<&str>) -> Result<Option<String>> {
    match part {
        Some(p) if !p.is_empty() => decode_component(p).map(Some),
        _ => Ok(None),
    }
}

/// Parse an absolute URL into its components.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] for empty or unparsable input and
/// [`Error::InvalidEncoding`] when the path or user info cannot be
/// percent-decoded.
///
/// # Examples
///
/// ```
/// use pathkit::url::parse_url;
///
/// let parsed = parse_url("https://user@example.com:8443/a%20b?x=1#top").unwrap();
/// assert_eq!(parsed.protocol, "https:");
/// assert_eq!(parsed.hostname, "example.com");
/// assert_eq!(parsed.port, Some(8443));
/// assert_eq!(parsed.pathname, "/a b");
/// assert_eq!(parsed.search, "?x=1");
/// assert_eq!(parsed.hash, "#top");
/// assert_eq!(parsed.username.as_deref(), Some("user"));
/// assert_eq!(parsed.password, None);
/// ```
pub fn parse_url(input: &str) -> Result<ParsedUrl> {
    if input.trim().is_empty() {
        return Err(Error::InvalidUrl {
            url: input.to_string(),
            reason: "URL is empty".to_string(),
        });
    }

    let url = Url::parse(input).map_err(|e| Error::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    Ok(ParsedUrl {
        protocol: format!("{}:", url.scheme()),
        hostname: url.host_str().unwrap_or_default().to_string(),
        port: url.port(),
        pathname: decode_component(url.path())?,
        search: prefixed('?', url.query()),
        hash: prefixed('#', url.fragment()),
        username: decode_non_empty(Some(url.username()))?,
        password: decode_non_empty(url.password())?,
    })
}
