//! Wildcard and regular-expression matching support.
//!
//! Wildcard matching delegates to `globset`; regular expressions delegate
//! to `regex`. Paths only provide the haystack (their canonical formatted
//! string or their name) and the case-sensitivity policy.

use globset::GlobBuilder;
use regex::Regex;

use crate::error::{Error, Result};
use crate::path::data::normalize_search_input;

/// Additional wildcard-matching flags.
///
/// `case_fold` duplicates what the `case_sensitive` argument of the match
/// methods already controls; requesting it together with case-sensitive
/// matching is contradictory and rejected.
///
/// # Examples
///
/// ```
/// use purepath::MatchFlags;
///
/// let flags = MatchFlags::default().with_case_fold(true);
/// assert!(flags.case_fold());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFlags {
    case_fold: bool,
    require_literal_separator: bool,
}

impl MatchFlags {
    /// Create the empty flag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force case-insensitive matching through the flag set.
    #[must_use]
    pub fn with_case_fold(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Require `*` and `?` to stop at separator boundaries.
    #[must_use]
    pub fn with_require_literal_separator(mut self, require: bool) -> Self {
        self.require_literal_separator = require;
        self
    }

    /// Whether case folding is forced through the flags.
    #[must_use]
    pub fn case_fold(&self) -> bool {
        self.case_fold
    }

    /// Whether wildcards stop at separator boundaries.
    #[must_use]
    pub fn require_literal_separator(&self) -> bool {
        self.require_literal_separator
    }
}

/// Match `haystack` against a wildcard pattern.
///
/// The pattern has its separators canonicalized first so either separator
/// style matches.
///
/// # Errors
///
/// Fails with `InvalidArgument` when `flags.case_fold()` is requested
/// together with `case_sensitive`, or with `Pattern` when the pattern does
/// not compile.
pub(crate) fn wildcard_match(
    haystack: &str,
    pattern: &str,
    case_sensitive: bool,
    flags: MatchFlags,
) -> Result<bool> {
    if flags.case_fold() && case_sensitive {
        return Err(Error::InvalidArgument {
            reason: "case-fold flag contradicts case-sensitive matching".to_string(),
        });
    }

    let pattern = normalize_search_input(pattern);
    let glob = GlobBuilder::new(&pattern)
        .case_insensitive(!case_sensitive || flags.case_fold())
        .literal_separator(flags.require_literal_separator())
        .build()?;

    Ok(glob.compile_matcher().is_match(haystack))
}

/// Match `haystack` against a regular expression.
pub(crate) fn regex_match(haystack: &str, pattern: &Regex) -> bool {
    pattern.is_match(haystack)
}

/// Match `haystack` against a regular expression, returning the matched
/// groups as owned strings (index 0 is the whole match).
pub(crate) fn regex_captures(haystack: &str, pattern: &Regex) -> Option<Vec<Option<String>>> {
    pattern.captures(haystack).map(|captures| {
        captures
            .iter()
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_match_basic() {
        assert!(wildcard_match("/foo/bar.txt", "*.txt", false, MatchFlags::new()).unwrap());
        assert!(!wildcard_match("/foo/bar.txt", "*.rs", false, MatchFlags::new()).unwrap());
    }

    #[test]
    fn test_wildcard_match_case_sensitivity() {
        assert!(wildcard_match("README.md", "readme.*", false, MatchFlags::new()).unwrap());
        assert!(!wildcard_match("README.md", "readme.*", true, MatchFlags::new()).unwrap());
    }

    #[test]
    fn test_wildcard_pattern_separators_normalized() {
        assert!(wildcard_match("/foo/bar", "\\foo\\*", false, MatchFlags::new()).unwrap());
    }

    #[test]
    fn test_wildcard_contradictory_flags_rejected() {
        let flags = MatchFlags::new().with_case_fold(true);
        let result = wildcard_match("foo", "foo", true, flags);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));

        // The flag is fine when matching is already case-insensitive.
        assert!(wildcard_match("FOO", "foo", false, flags).unwrap());
    }

    #[test]
    fn test_wildcard_literal_separator() {
        let spanning = MatchFlags::new();
        assert!(wildcard_match("/a/b/c", "/a/*", false, spanning).unwrap());

        let literal = MatchFlags::new().with_require_literal_separator(true);
        assert!(!wildcard_match("/a/b/c", "/a/*", false, literal).unwrap());
        assert!(wildcard_match("/a/b", "/a/*", false, literal).unwrap());
    }

    #[test]
    fn test_wildcard_invalid_pattern() {
        let result = wildcard_match("foo", "[", false, MatchFlags::new());
        assert!(matches!(result, Err(Error::Pattern(_))));
    }

    #[test]
    fn test_regex_match() {
        let re = Regex::new(r"^/foo/\w+$").unwrap();
        assert!(regex_match("/foo/bar", &re));
        assert!(!regex_match("/other", &re));
    }

    #[test]
    fn test_regex_captures_groups() {
        let re = Regex::new(r"^(\w+)\.(\w+)$").unwrap();
        let groups = regex_captures("file.txt", &re).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].as_deref(), Some("file.txt"));
        assert_eq!(groups[1].as_deref(), Some("file"));
        assert_eq!(groups[2].as_deref(), Some("txt"));

        assert!(regex_captures("no-match/", &re).is_none());
    }
}
