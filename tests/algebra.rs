//! Integration tests for the path operation algebra.
//!
//! This test suite verifies that:
//! - Every operation is pure and variant-preserving
//! - Name and extension manipulation follows the documented boundary rules
//! - No-op operations return equal values
//! - The documented error taxonomy is raised at the documented points

use purepath::{AbsolutePath, Atom, Error, MatchFlags, Path, PathOps, RelativePath};
use regex::Regex;

// =============================================================================
// Joins
// =============================================================================

#[test]
fn test_join_relative_path() {
    let base = AbsolutePath::from_string("/var").unwrap();
    let tail = RelativePath::from_string("log/app").unwrap();
    assert_eq!(base.join(&tail).unwrap().format('/'), "/var/log/app");
}

#[test]
fn test_join_atom_sequence_validates() {
    let base = RelativePath::from_string("a").unwrap();
    assert_eq!(base.join_atom_sequence(["b", "c"]).unwrap().format('/'), "a/b/c");
    assert!(matches!(
        base.join_atom_sequence([""]),
        Err(Error::EmptyAtom)
    ));
    assert!(matches!(
        base.join_atom_sequence(["x/y"]),
        Err(Error::AtomContainsSeparator { .. })
    ));
}

#[test]
fn test_join_atoms_accepts_validated_atoms() {
    let base = RelativePath::from_string("a").unwrap();
    let atoms = vec![Atom::new("b").unwrap()];
    assert_eq!(base.join_atoms(&atoms).unwrap().format('/'), "a/b");
}

#[test]
fn test_scenario_join_extensions() {
    let path = Path::from_string("path/to/file").unwrap();
    assert_eq!(
        path.join_extensions(["html", "twig"]).unwrap().format('/'),
        "path/to/file.html.twig"
    );
}

// =============================================================================
// Trailing separator
// =============================================================================

#[test]
fn test_trailing_separator_join_and_strip() {
    let path = Path::from_string("/path/to/this").unwrap();
    let joined = path.join_trailing_separator();
    assert_eq!(joined.format('/'), "/path/to/this/");
    assert_eq!(joined.strip_trailing_separator(), path);
}

#[test]
fn test_trailing_separator_no_ops_return_equal_values() {
    let with = Path::from_string("/path/").unwrap();
    assert_eq!(with.join_trailing_separator(), with);

    let without = Path::from_string("/path").unwrap();
    assert_eq!(without.strip_trailing_separator(), without);
}

// =============================================================================
// Parent
// =============================================================================

#[test]
fn test_parent_levels() {
    assert_eq!(
        Path::from_string("/test/path").unwrap().parent(1).unwrap().format('/'),
        "/test"
    );
    assert_eq!(
        Path::from_string("/test/path/").unwrap().parent(2).unwrap().format('/'),
        "/"
    );
    assert_eq!(
        Path::from_string("../test/path/").unwrap().parent(4).unwrap().format('/'),
        ".."
    );
    assert_eq!(
        Path::from_string("../test/path/").unwrap().parent(5).unwrap().format('/'),
        "../.."
    );
}

#[test]
fn test_scenario_parent_above_root_fails() {
    let path = AbsolutePath::from_string("/path/to").unwrap();
    assert!(matches!(path.parent(3), Err(Error::InvalidPathState { .. })));
}

// =============================================================================
// Names and extensions
// =============================================================================

#[test]
fn test_name_views() {
    let path = Path::from_string("path/to/page.html.twig").unwrap();
    assert_eq!(path.name(), "page.html.twig");
    assert_eq!(path.name_atoms(), vec!["page", "html", "twig"]);
    assert_eq!(path.name_prefix(), "page");
    assert_eq!(path.name_suffix().as_deref(), Some("html.twig"));
    assert_eq!(path.extension().as_deref(), Some("twig"));
    assert_eq!(path.name_without_extension(), "page.html");
    assert!(path.has_extension());
}

#[test]
fn test_leading_dot_name_rules() {
    let path = Path::from_string("conf/.htaccess").unwrap();
    assert_eq!(path.name_prefix(), "");
    assert_eq!(path.extension().as_deref(), Some("htaccess"));
    assert_eq!(path.name_without_extension(), "");
    assert!(path.has_extension());
}

#[test]
fn test_single_segment_name_has_no_extension() {
    let path = Path::from_string("path/to/filename").unwrap();
    assert_eq!(path.extension(), None);
    assert_eq!(path.name_suffix(), None);
    assert_eq!(path.name_without_extension(), "filename");
    assert!(!path.has_extension());
}

#[test]
fn test_name_without_extension_keeps_inner_dots() {
    let path = Path::from_string("this.is.my.file.txt").unwrap();
    assert_eq!(path.name_without_extension(), "this.is.my.file");
}

#[test]
fn test_replace_extension() {
    let cases = [
        ("/path/to/file.html.twig", "php", "/path/to/file.html.php"),
        ("/path/to/file.html.twig", "blade.php", "/path/to/file.html.blade.php"),
        ("/path/to/.twig", ".blade.php", "/path/to/.blade.php"),
        ("/path/to/file", ".html.twig", "/path/to/file.html.twig"),
    ];
    for (input, replacement, expected) in cases {
        let path = Path::from_string(input).unwrap();
        assert_eq!(
            path.replace_extension(replacement).unwrap().format('/'),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn test_replace_name_suffix() {
    let cases = [
        ("/path/to/file.html.twig", "blade.php", "/path/to/file.blade.php"),
        ("/path/to/.html.twig", "blade.php", "/path/to/.blade.php"),
        ("/path/to/.twig", ".blade.php", "/path/to/.blade.php"),
        ("/path/to/twig", ".blade.php", "/path/to/twig.blade.php"),
    ];
    for (input, replacement, expected) in cases {
        let path = Path::from_string(input).unwrap();
        assert_eq!(
            path.replace_name_suffix(replacement).unwrap().format('/'),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn test_replace_name_and_prefix() {
    let path = Path::from_string("a/b/old.html").unwrap();
    assert_eq!(path.replace_name("new.txt").unwrap().format('/'), "a/b/new.txt");
    assert_eq!(path.replace_name_prefix("new").unwrap().format('/'), "a/b/new.html");
    assert_eq!(
        path.replace_name_without_extension("new").unwrap().format('/'),
        "a/b/new.html"
    );
}

#[test]
fn test_suffix_and_prefix_name() {
    let path = Path::from_string("path/to/file").unwrap();
    assert_eq!(
        path.suffix_name("s.html.twig").unwrap().format('/'),
        "path/to/files.html.twig"
    );
    assert_eq!(path.prefix_name("my-").unwrap().format('/'), "path/to/my-file");
}

#[test]
fn test_strip_extension_and_suffix() {
    let path = Path::from_string("a/file.tar.gz").unwrap();
    assert_eq!(path.strip_extension().unwrap().format('/'), "a/file.tar");
    assert_eq!(path.strip_name_suffix().unwrap().format('/'), "a/file");

    // No extension: unchanged equal value.
    let plain = Path::from_string("a/file").unwrap();
    assert_eq!(plain.strip_extension().unwrap(), plain);
}

#[test]
fn test_replace_name_atoms() {
    let path = Path::from_string("a/page.html.twig").unwrap();
    assert_eq!(
        path.replace_name_atoms(1, ["xhtml"], Some(1)).unwrap().format('/'),
        "a/page.xhtml.twig"
    );
}

// =============================================================================
// Positional replace
// =============================================================================

#[test]
fn test_replace_splices_range() {
    let path = Path::from_string("path/from/otherFile").unwrap();
    assert_eq!(
        path.replace(1, ["to", "file.html.twig"], None).unwrap().format('/'),
        "path/to/file.html.twig"
    );
}

#[test]
fn test_replace_extends_past_end() {
    // Splice policy: replacement items beyond the old range extend the
    // path instead of being dropped.
    let path = Path::from_string("a/b").unwrap();
    assert_eq!(
        path.replace(1, ["x", "y"], Some(1)).unwrap().format('/'),
        "a/x/y"
    );
}

// =============================================================================
// Indexed access
// =============================================================================

#[test]
fn test_atom_at_with_negative_indexes() {
    let path = Path::from_string("a/b/c").unwrap();
    assert_eq!(path.atom_at(0).unwrap().as_str(), "a");
    assert_eq!(path.atom_at(-1).unwrap().as_str(), "c");
    assert!(matches!(
        path.atom_at(3),
        Err(Error::UndefinedAtomIndex { index: 3, .. })
    ));
    assert!(matches!(
        path.atom_at(-4),
        Err(Error::UndefinedAtomIndex { index: -4, .. })
    ));
    assert!(path.get_atom(-4).is_none());
}

#[test]
fn test_slice_atoms() {
    let path = Path::from_string("a/b/c/d").unwrap();
    let strs = |atoms: Vec<Atom>| {
        atoms.iter().map(|a| a.as_str().to_string()).collect::<Vec<_>>()
    };
    assert_eq!(strs(path.slice_atoms(1, Some(2))), vec!["b", "c"]);
    assert_eq!(strs(path.slice_atoms(-2, None)), vec!["c", "d"]);
    assert_eq!(strs(path.slice_atoms(0, Some(-1))), vec!["a", "b", "c"]);
}

#[test]
fn test_name_atom_access() {
    let path = Path::from_string("file.tar.gz").unwrap();
    assert_eq!(path.name_atom_at(-1).unwrap(), "gz");
    assert_eq!(path.slice_name_atoms(0, Some(-1)), vec!["file", "tar"]);
    assert!(path.name_atom_at(5).is_err());
}

// =============================================================================
// Predicates
// =============================================================================

#[test]
fn test_contains_and_affix_predicates() {
    let path = Path::from_string("/Foo/Bar.TXT").unwrap();

    assert!(path.contains("bar", false));
    assert!(!path.contains("bar", true));
    assert!(path.contains("", true));

    assert!(path.starts_with("/foo", false));
    assert!(!path.starts_with("/foo", true));
    assert!(path.ends_with(".txt", false));

    // Needles accept either separator style.
    assert!(path.starts_with("\\Foo", true));
}

#[test]
fn test_name_predicates() {
    let path = Path::from_string("/Foo/Bar.TXT").unwrap();
    assert!(path.name_contains("bar", false));
    assert!(path.name_starts_with("bar", false));
    assert!(!path.name_starts_with("bar", true));
    assert!(!path.name_starts_with("ar", false));
}

#[test]
fn test_wildcard_matching() {
    let path = Path::from_string("/path/to/hell.txt").unwrap();
    assert!(path.matches("*.txt", false).unwrap());
    assert!(path.matches("/path/*", false).unwrap());
    assert!(!path.matches("*.rs", false).unwrap());
    assert!(path.name_matches("hell.*", false).unwrap());
    assert!(!path.name_matches("HELL.*", true).unwrap());
}

#[test]
fn test_contradictory_match_flags_rejected() {
    let path = Path::from_string("/a").unwrap();
    let flags = MatchFlags::new().with_case_fold(true);
    assert!(matches!(
        path.matches_with("*", true, flags),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(path.matches_with("*", false, flags).unwrap());
}

#[test]
fn test_regex_matching_returns_groups() {
    let path = Path::from_string("/srv/app-42/log").unwrap();
    let re = Regex::new(r"app-(\d+)").unwrap();

    assert!(path.matches_regex(&re));
    let groups = path.regex_captures(&re).unwrap();
    assert_eq!(groups[1].as_deref(), Some("42"));

    let name_re = Regex::new(r"^(l)(o)(g)$").unwrap();
    assert!(path.name_matches_regex(&name_re));
    assert_eq!(path.name_regex_captures(&name_re).unwrap().len(), 4);
}

// =============================================================================
// Scenario: relative diff
// =============================================================================

#[test]
fn test_scenario_relative_to_sibling() {
    let child = AbsolutePath::from_string("/foo/bar").unwrap();
    let base = AbsolutePath::from_string("/foo/baz").unwrap();
    assert_eq!(child.relative_to(&base).unwrap().format('/'), "../bar");
}

// =============================================================================
// Immutability
// =============================================================================

#[test]
fn test_operations_never_mutate_the_receiver() {
    let path = Path::from_string("a/b/c").unwrap();
    let snapshot = path.clone();

    let _ = path.parent(1).unwrap();
    let _ = path.replace_name("z").unwrap();
    let _ = path.join_trailing_separator();
    let _ = path.normalize();

    assert_eq!(path, snapshot);
}
