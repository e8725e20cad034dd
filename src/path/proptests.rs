//! Property-based tests for path values.
//!
//! Note: the normalize module already has property tests for the atom
//! scan itself. This module focuses on whole-value laws: construction,
//! formatting round-trips, and the resolve/relative_to relationship.

use proptest::prelude::*;

use super::absolute::AbsolutePath;
use super::any::Path;
use super::ops::PathOps;

// Strategy for generating path components
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,10}"
}

fn absolute_path_strategy() -> impl Strategy<Value = AbsolutePath> {
    prop::collection::vec(component_strategy(), 0..6).prop_map(|parts| {
        AbsolutePath::from_atoms(parts, false).expect("plain components are always valid")
    })
}

fn any_path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(
        prop_oneof![
            Just("..".to_string()),
            Just(".".to_string()),
            component_strategy(),
        ],
        0..8,
    )
    .prop_map(|parts| {
        Path::from_string(&parts.join("/")).expect("relative input always parses")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in any_path_strategy()) {
        let once = path.normalize();
        let twice = once.normalize();
        prop_assert_eq!(once, twice);
    }

    // An absolute path's normalized atoms never lead with a parent atom
    #[test]
    fn absolute_never_leads_with_parent(path in absolute_path_strategy()) {
        let normalized = path.normalize();
        prop_assert!(!normalized.atoms().first().is_some_and(|a| a.is_parent()));
    }

    // Formatting after join_trailing_separator always ends with the separator
    #[test]
    fn trailing_join_format_law(path in absolute_path_strategy()) {
        let joined = path.join_trailing_separator();
        prop_assert!(joined.format('/').ends_with('/'));
    }

    // join_trailing_separator is a no-op on a path that already has the flag
    #[test]
    fn trailing_join_no_op(path in absolute_path_strategy()) {
        let joined = path.join_trailing_separator();
        prop_assert_eq!(joined.join_trailing_separator(), joined);
    }

    // Parsing a formatted path recovers the same atoms
    #[test]
    fn format_parse_round_trip(path in any_path_strategy()) {
        let normalized = path.normalize();
        let reparsed = Path::from_string(&normalized.format('/')).unwrap();
        prop_assert_eq!(reparsed.normalize().atoms(), normalized.atoms());
    }

    // Either separator renders to an equivalent re-parsable string
    #[test]
    fn backslash_format_round_trip(path in absolute_path_strategy()) {
        let reparsed = Path::from_string(&path.format('\\')).unwrap();
        prop_assert_eq!(reparsed.atoms(), path.atoms());
        prop_assert!(reparsed.is_absolute());
    }

    // base.resolve(child.relative_to(base)) recovers child, up to
    // normalization
    #[test]
    fn resolve_inverts_relative_to(
        base in absolute_path_strategy(),
        child in absolute_path_strategy(),
    ) {
        let diff = child.relative_to(&base).unwrap();
        let recovered = base.resolve(&Path::Relative(diff)).unwrap();
        prop_assert_eq!(recovered.normalize().atoms(), child.normalize().atoms());
    }

    // relative_to output is either the self atom (equal paths) or already
    // normalized
    #[test]
    fn relative_to_is_normalized(
        base in absolute_path_strategy(),
        child in absolute_path_strategy(),
    ) {
        let diff = child.relative_to(&base).unwrap();
        if child.normalize().atoms() == base.normalize().atoms() {
            prop_assert_eq!(diff.format('/'), ".");
        } else {
            prop_assert_eq!(diff.normalize().atoms(), diff.atoms());
        }
    }

    // Operations preserve the variant of the receiver
    #[test]
    fn operations_preserve_variant(path in any_path_strategy()) {
        prop_assert!(path.join_trailing_separator().is_relative());
        prop_assert!(path.normalize().is_relative());
        if let Ok(renamed) = path.replace_name("renamed") {
            prop_assert!(renamed.is_relative());
        }
    }
}
