//! End-to-end checks of the documented path and URL behaviour.

use pathkit::dispatch::{invoke, Operation};
use pathkit::path::{classify, normalize, relative, resolve, to_posix, to_win32, FixedCwd, PathKind};
use pathkit::url::{from_file_url, parse_url, query_string, to_file_url, DEFAULT_QUERY_SEPARATOR};
use pathkit::{Error, ErrorKind};
use serde_json::json;

#[test]
fn test_documented_cases() {
    assert_eq!(to_file_url("/foo/bar"), "file:///foo/bar");
    assert_eq!(from_file_url("file:///foo/bar").unwrap(), "/foo/bar");
    assert_eq!(to_win32("/c/temp/foo/bar"), "C:\\temp\\foo\\bar");
    assert_eq!(to_posix("C:\\temp\\foo\\bar"), "/c/temp/foo/bar");
    assert_eq!(
        relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb"),
        "../../impl/bbb"
    );
    assert_eq!(
        query_string(&json!({"a": "1", "b": "2"}), DEFAULT_QUERY_SEPARATOR),
        "?a=1&b=2"
    );
    assert_eq!(query_string(&json!(null), DEFAULT_QUERY_SEPARATOR), "");
}

#[test]
fn test_conversions_are_idempotent() {
    for path in [
        "C:\\temp\\foo",
        "/c/temp/foo",
        "\\\\server\\share\\x",
        "relative\\dir/mixed",
        "",
        "d:",
    ] {
        let posix = to_posix(path);
        assert_eq!(to_posix(&posix), posix, "to_posix not idempotent for {path:?}");
        let win = to_win32(path);
        assert_eq!(to_win32(&win), win, "to_win32 not idempotent for {path:?}");
    }
}

#[test]
fn test_posix_win32_round_trip_for_drive_paths() {
    let win = "C:\\Users\\me\\docs";
    assert_eq!(to_win32(&to_posix(win)), win);
}

#[test]
fn test_classification_matches_conversion() {
    assert_eq!(classify("C:\\temp"), PathKind::WindowsDrive);
    assert_eq!(classify("\\\\host\\share"), PathKind::Unc);
    assert_eq!(classify("/etc"), PathKind::PosixAbsolute);
    assert_eq!(classify("a/b"), PathKind::Relative);
    assert!(to_posix("\\\\host\\share").starts_with("//"));
}

#[test]
fn test_resolve_then_relative() {
    let cwd = FixedCwd::new("/home/myself/node");
    let a = resolve(&["src/lib"], &cwd).unwrap();
    let b = resolve(&["tests/fixtures"], &cwd).unwrap();
    assert_eq!(a, "/home/myself/node/src/lib");

    let rel = relative(&a, &b);
    assert_eq!(rel, "../../tests/fixtures");
    assert_eq!(resolve(&[a.as_str(), rel.as_str()], &cwd).unwrap(), b);
}

#[test]
fn test_relative_to_self_is_empty() {
    for path in ["/", "/a", "/a/b/c", "C:/x"] {
        assert_eq!(relative(path, path), "");
    }
}

#[test]
fn test_normalize_then_file_url_round_trip() {
    let path = normalize("/srv//www/./site/../index.html");
    assert_eq!(path, "/srv/www/index.html");
    assert_eq!(from_file_url(&to_file_url(&path)).unwrap(), path);
}

#[test]
fn test_error_kinds() {
    assert_eq!(from_file_url("http://x").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(
        from_file_url("file:///%E0%A4%A").unwrap_err().kind(),
        ErrorKind::Format
    );
    assert_eq!(parse_url("not a url").unwrap_err().kind(), ErrorKind::Format);

    let cwd = FixedCwd::new("/");
    let err = invoke(Operation::Normalize, &[json!(["a"])], &cwd).unwrap_err();
    assert!(matches!(err, Error::InvalidType { .. }));
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_dispatch_by_name() {
    let cwd = FixedCwd::new("/work");
    let op: Operation = "resolve".parse().unwrap();
    let out = invoke(op, &[json!("a"), json!("../b")], &cwd).unwrap();
    assert_eq!(out, json!("/work/b"));
}
