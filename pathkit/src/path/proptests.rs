//! Property-based tests across the path operations.
//!
//! The individual modules carry their own single-function properties; this
//! module checks how the operations compose.

use super::{normalize, relative, resolve, to_posix, to_win32, FixedCwd};
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn drive_path_strategy() -> impl Strategy<Value = String> {
    ("[a-zA-Z]", prop::collection::vec(path_component_strategy(), 0..6))
        .prop_map(|(drive, parts)| format!("{drive}:\\{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Resolving the relative path from a onto a lands on b
    #[test]
    fn resolve_relative_reaches_target(
        a in absolute_path_strategy(),
        b in absolute_path_strategy(),
    ) {
        let cwd = FixedCwd::new("/unused");
        let rel = relative(&a, &b);
        let reached = resolve(&[a.as_str(), rel.as_str()], &cwd).unwrap();
        prop_assert_eq!(reached, b);
    }

    // Never climbs more levels than `from` has
    #[test]
    fn relative_climbs_match_depth(
        a in absolute_path_strategy(),
        b in absolute_path_strategy(),
    ) {
        let rel = relative(&a, &b);
        let climbs = rel.split('/').take_while(|s| *s == "..").count();
        let depth = a.split('/').filter(|s| !s.is_empty()).count();
        prop_assert!(climbs <= depth);
    }

    // Already-normalized absolute paths resolve to themselves
    #[test]
    fn resolve_normalized_absolute_is_identity(a in absolute_path_strategy()) {
        let cwd = FixedCwd::new("/unused");
        prop_assert_eq!(resolve(&[a.as_str()], &cwd).unwrap(), normalize(&a));
    }

    // Drive paths survive a POSIX round trip
    #[test]
    fn drive_paths_round_trip(p in drive_path_strategy()) {
        let posix = to_posix(&p);
        let win = to_win32(&posix);
        prop_assert_eq!(to_posix(&win), posix);
        prop_assert!(win.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    }
}
