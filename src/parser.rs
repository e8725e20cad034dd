//! Path string parsing.
//!
//! The parser turns a raw string plus a [`ParseOptions`] configuration into
//! a transient [`ParsingResult`]: the atoms, the detected path kind, an
//! optional drive letter, and whether the input carried a trailing
//! separator. The result is consumed immediately by the factory; it is
//! never retained.
//!
//! Parsing only removes no-op content (whitespace, empty segments, `.`
//! atoms). Parent atoms (`..`) are kept verbatim; resolving them is the
//! normalizer's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::drive::Drive;

/// The kind of a parsed or constructed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathType {
    /// A path starting at a root (separator-led).
    Absolute,
    /// A path interpreted against some base.
    Relative,
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute"),
            Self::Relative => write!(f, "relative"),
        }
    }
}

/// Configuration for the parser.
///
/// The separator list is ordered: the first entry is the primary
/// (canonical) separator, every other entry is recognized on input and
/// canonicalized to the primary.
///
/// # Examples
///
/// ```
/// use purepath::ParseOptions;
///
/// let options = ParseOptions::default();
/// assert_eq!(options.primary_separator(), '/');
///
/// let windows = ParseOptions::default().with_parse_windows_drive(true);
/// assert!(windows.parse_windows_drive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    separators: Vec<char>,
    parse_windows_drive: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separators: vec!['/', '\\'],
            parse_windows_drive: false,
        }
    }
}

impl ParseOptions {
    /// Create options with the default separator set (`/` primary, `\`
    /// accepted) and drive parsing disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted separator set.
    ///
    /// The first separator becomes the primary. An empty list is replaced
    /// by the default set rather than producing an unusable parser.
    #[must_use]
    pub fn with_separators(mut self, separators: Vec<char>) -> Self {
        if separators.is_empty() {
            self.separators = vec!['/', '\\'];
        } else {
            self.separators = separators;
        }
        self
    }

    /// Enable or disable recognition of a leading `letter:` drive prefix.
    #[must_use]
    pub fn with_parse_windows_drive(mut self, parse: bool) -> Self {
        self.parse_windows_drive = parse;
        self
    }

    /// The primary (canonical) separator.
    #[must_use]
    pub fn primary_separator(&self) -> char {
        self.separators[0]
    }

    /// The non-primary separators, canonicalized away on input.
    #[must_use]
    pub fn alternative_separators(&self) -> &[char] {
        &self.separators[1..]
    }

    /// Whether a leading `letter:` prefix is extracted as a drive.
    #[must_use]
    pub fn parse_windows_drive(&self) -> bool {
        self.parse_windows_drive
    }

    fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }
}

/// The outcome of a single parse call.
///
/// Produced by [`Parser::parse`] and consumed immediately by the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingResult {
    /// The dense, order-preserving atom list. Atoms are plain strings
    /// here; validation happens when the concrete path is constructed.
    pub atoms: Vec<String>,
    /// The detected path kind.
    pub path_type: PathType,
    /// The captured drive letter, if drive parsing was enabled and a
    /// prefix was present.
    pub drive: Option<Drive>,
    /// Whether the canonicalized input ended with the primary separator.
    pub has_trailing_separator: bool,
}

/// Converts raw strings into [`ParsingResult`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw string into atoms, path kind, drive, and
    /// trailing-separator flag.
    ///
    /// Absence of a drive is not an error here, even when drive parsing is
    /// enabled; requiring one is the factory's decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{ParseOptions, Parser, PathType};
    ///
    /// let result = Parser::new().parse("/foo//bar/./", &ParseOptions::default());
    /// assert_eq!(result.atoms, vec!["foo".to_string(), "bar".to_string()]);
    /// assert_eq!(result.path_type, PathType::Absolute);
    /// assert!(result.has_trailing_separator);
    /// assert!(result.drive.is_none());
    /// ```
    #[must_use]
    pub fn parse(&self, raw: &str, options: &ParseOptions) -> ParsingResult {
        let trimmed = raw.trim();

        let (drive, rest) = if options.parse_windows_drive() {
            Self::split_drive(trimmed)
        } else {
            (None, trimmed)
        };

        let path_type = if rest.chars().next().is_some_and(|c| options.is_separator(c)) {
            PathType::Absolute
        } else {
            PathType::Relative
        };

        let primary = options.primary_separator();
        let canonical: String = rest
            .chars()
            .map(|c| if options.is_separator(c) { primary } else { c })
            .collect();

        let has_trailing_separator = canonical.ends_with(primary);

        let atoms: Vec<String> = canonical
            .split(primary)
            .map(str::trim)
            .filter(|atom| !atom.is_empty())
            .filter(|atom| *atom != crate::atom::SELF_ATOM)
            .map(str::to_string)
            .collect();

        log::trace!(
            "parsed {raw:?} -> {path_type} path, {} atom(s), drive {drive:?}, trailing {has_trailing_separator}",
            atoms.len()
        );

        ParsingResult {
            atoms,
            path_type,
            drive,
            has_trailing_separator,
        }
    }

    /// Detect a `letter:` prefix: exactly one ASCII letter immediately
    /// followed by a colon at the very start of the trimmed input.
    fn split_drive(input: &str) -> (Option<Drive>, &str) {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => {
                // Drive::new cannot fail for an ASCII letter.
                let drive = Drive::new(letter).ok();
                (drive, &input[2..])
            }
            _ => (None, input),
        }
    }
}
