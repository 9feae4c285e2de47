//! Property-based tests for the URL helpers.

use super::encoding::{decode_component, encode_component};
use super::{from_file_url, to_file_url};
use crate::path::to_posix;
use proptest::prelude::*;

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec("[a-zA-Z0-9_.-]{1,12}", 0..6), any::<bool>()).prop_map(
        |(parts, trailing)| {
            let path = format!("/{}", parts.join("/"));
            if trailing && !parts.is_empty() {
                format!("{path}/")
            } else {
                path
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // A plain absolute path comes back as its POSIX form
    #[test]
    fn file_url_round_trip(path in absolute_path_strategy()) {
        let url = to_file_url(&path);
        prop_assert_eq!(from_file_url(&url).unwrap(), to_posix(&path));
    }

    // Any string survives encode then decode
    #[test]
    fn component_round_trip(s in any::<String>()) {
        prop_assert_eq!(decode_component(&encode_component(&s)).unwrap(), s);
    }

    // Encoded components only contain URL-safe characters
    #[test]
    fn encoded_component_is_ascii(s in any::<String>()) {
        let encoded = encode_component(&s);
        prop_assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_.!~*'()%".contains(&b)));
    }

    // Every file URL starts with the scheme
    #[test]
    fn file_url_has_scheme(path in ".*") {
        prop_assert!(to_file_url(&path).starts_with("file://"));
    }
}
