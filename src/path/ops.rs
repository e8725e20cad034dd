//! The operation algebra shared by every path value.
//!
//! [`PathOps`] carries the whole variant-independent algebra as provided
//! methods; the concrete types only supply field access and their own
//! structural checks through the sealed core. Every operation is pure and
//! returns a new value of the same variant as the receiver.

use regex::Regex;

use crate::atom::{Atom, ATOM_SEPARATOR};
use crate::drive::Drive;
use crate::error::{Error, Result};
use crate::path::data::{fold_case, normalize_search_input};
use crate::path::pattern::{self, MatchFlags};
use crate::path::relative::RelativePath;

pub(crate) mod sealed {
    use crate::error::Result;
    use crate::path::data::PathData;

    /// Field access and variant-specific reconstruction, implemented by
    /// each path value type. Not part of the public API.
    pub trait PathCore: Sized + Clone {
        /// The shared fields.
        fn data(&self) -> &PathData;

        /// Whether this value is of the absolute kind.
        fn is_absolute_kind(&self) -> bool;

        /// Build a new value of the same variant, re-running the
        /// variant's structural checks (atom validity, absolute outbound
        /// traversal).
        fn rebuild(&self, data: PathData) -> Result<Self>;

        /// Build a new value of the same variant from data already known
        /// to satisfy the variant's checks (flag-only changes,
        /// normalization of an already-valid value).
        fn rebuild_trusted(&self, data: PathData) -> Self;
    }
}

/// Operations available on every path value.
///
/// All operations return a new value of the same concrete variant as the
/// receiver; a no-op operation returns an equal value. Operations that
/// produce atoms validate every new atom before the value is built.
///
/// # Examples
///
/// ```
/// use purepath::{PathOps, RelativePath};
///
/// let path = RelativePath::from_string("path/to/file").unwrap();
/// assert_eq!(path.name(), "file");
/// assert_eq!(
///     path.join_extensions(["html", "twig"]).unwrap().format('/'),
///     "path/to/file.html.twig"
/// );
/// ```
pub trait PathOps: sealed::PathCore {
    // Accessors -----------------------------------------------------------

    /// The atoms of this path.
    ///
    /// For example, the path `/foo/bar` has the atoms `foo` and `bar`.
    #[must_use]
    fn atoms(&self) -> &[Atom] {
        self.data().atoms()
    }

    /// Whether this path has at least one atom.
    #[must_use]
    fn has_atoms(&self) -> bool {
        !self.data().atoms().is_empty()
    }

    /// Whether this path has a trailing separator.
    #[must_use]
    fn has_trailing_separator(&self) -> bool {
        self.data().has_trailing_separator()
    }

    /// The drive this path is anchored to, if any.
    #[must_use]
    fn drive(&self) -> Option<Drive> {
        self.data().drive()
    }

    /// Get a single atom by index; negative indexes resolve from the end.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UndefinedAtomIndex`] if the index (positive or
    /// resolved-negative) lies outside the atom sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{PathOps, RelativePath};
    ///
    /// let path = RelativePath::from_string("foo/bar").unwrap();
    /// assert_eq!(path.atom_at(0).unwrap().as_str(), "foo");
    /// assert_eq!(path.atom_at(-1).unwrap().as_str(), "bar");
    /// assert!(path.atom_at(2).is_err());
    /// ```
    fn atom_at(&self, index: isize) -> Result<&Atom> {
        self.data().atom_at(index)
    }

    /// Get a single atom by index, or `None` when the index is undefined.
    #[must_use]
    fn get_atom(&self, index: isize) -> Option<&Atom> {
        self.data().get_atom(index)
    }

    /// Get a subset of this path's atoms.
    ///
    /// Negative `start` counts from the end; a negative `length` stops
    /// that many atoms short of the end.
    #[must_use]
    fn slice_atoms(&self, start: isize, length: Option<isize>) -> Vec<Atom> {
        self.data().slice_atoms(start, length)
    }

    /// This path's name: the last atom, or the empty string for a
    /// zero-atom path.
    #[must_use]
    fn name(&self) -> &str {
        self.data().name()
    }

    /// The name split on the extension separator, empty segments dropped.
    ///
    /// The name `foo.tar.gz` has the name atoms `foo`, `tar`, and `gz`.
    #[must_use]
    fn name_atoms(&self) -> Vec<String> {
        self.data().name_atoms()
    }

    /// Get a single name atom by index; negative indexes resolve from the
    /// end.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UndefinedAtomIndex`] if the index lies outside
    /// the name-atom sequence.
    fn name_atom_at(&self, index: isize) -> Result<String> {
        self.data().name_atom_at(index)
    }

    /// Get a single name atom by index, or `None` when undefined.
    #[must_use]
    fn get_name_atom(&self, index: isize) -> Option<String> {
        self.data().get_name_atom(index)
    }

    /// Get a subset of this path's name atoms, with the same index
    /// semantics as [`PathOps::slice_atoms`].
    #[must_use]
    fn slice_name_atoms(&self, start: isize, length: Option<isize>) -> Vec<String> {
        self.data().slice_name_atoms(start, length)
    }

    /// This path's name, excluding the last extension.
    #[must_use]
    fn name_without_extension(&self) -> String {
        self.data().name_without_extension()
    }

    /// This path's name, excluding all extensions. A name leading with the
    /// extension separator (`.htaccess`) has no prefix.
    #[must_use]
    fn name_prefix(&self) -> String {
        self.data().name_prefix()
    }

    /// All of this path's extensions, or `None` when the name has none.
    #[must_use]
    fn name_suffix(&self) -> Option<String> {
        self.data().name_suffix()
    }

    /// This path's last extension, or `None` when the name has none.
    ///
    /// A name with a single dot-delimited segment has no extension; a
    /// name leading with the separator (`.htaccess`) has its remainder as
    /// its sole extension.
    #[must_use]
    fn extension(&self) -> Option<String> {
        self.data().extension()
    }

    /// Whether this path's name has any extension.
    #[must_use]
    fn has_extension(&self) -> bool {
        self.data().has_extension()
    }

    // Formatting ----------------------------------------------------------

    /// Render this path with the given separator.
    ///
    /// Produces `[drive:][separator if absolute]atom₁ separator … atomₙ
    /// [separator if trailing]`; a zero-atom absolute path renders as a
    /// single separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{AbsolutePath, PathOps};
    ///
    /// let path = AbsolutePath::from_string("/foo/bar/").unwrap();
    /// assert_eq!(path.format('/'), "/foo/bar/");
    /// assert_eq!(path.format('\\'), "\\foo\\bar\\");
    /// ```
    #[must_use]
    fn format(&self, separator: char) -> String {
        self.data().format(separator, self.is_absolute_kind())
    }

    // Search predicates ---------------------------------------------------

    /// Whether this path's formatted string contains a substring.
    ///
    /// The needle is separator-normalized first, so either separator
    /// style matches. Pass `case_sensitive = false` for the convenience
    /// case-insensitive comparison.
    #[must_use]
    fn contains(&self, needle: &str, case_sensitive: bool) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = normalize_search_input(needle);
        let haystack = self.format(ATOM_SEPARATOR);
        if case_sensitive {
            haystack.contains(&needle)
        } else {
            fold_case(&haystack).contains(&fold_case(&needle))
        }
    }

    /// Whether this path's formatted string starts with a substring.
    #[must_use]
    fn starts_with(&self, needle: &str, case_sensitive: bool) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = normalize_search_input(needle);
        let haystack = self.format(ATOM_SEPARATOR);
        if case_sensitive {
            haystack.starts_with(&needle)
        } else {
            fold_case(&haystack).starts_with(&fold_case(&needle))
        }
    }

    /// Whether this path's formatted string ends with a substring.
    #[must_use]
    fn ends_with(&self, needle: &str, case_sensitive: bool) -> bool {
        let needle = normalize_search_input(needle);
        let haystack = self.format(ATOM_SEPARATOR);
        if case_sensitive {
            haystack.ends_with(&needle)
        } else {
            fold_case(&haystack).ends_with(&fold_case(&needle))
        }
    }

    /// Whether this path's name contains a substring.
    #[must_use]
    fn name_contains(&self, needle: &str, case_sensitive: bool) -> bool {
        if needle.is_empty() {
            return true;
        }
        if case_sensitive {
            self.name().contains(needle)
        } else {
            fold_case(self.name()).contains(&fold_case(needle))
        }
    }

    /// Whether this path's name starts with a substring.
    #[must_use]
    fn name_starts_with(&self, needle: &str, case_sensitive: bool) -> bool {
        if needle.is_empty() {
            return true;
        }
        if case_sensitive {
            self.name().starts_with(needle)
        } else {
            fold_case(self.name()).starts_with(&fold_case(needle))
        }
    }

    /// Whether this path matches a wildcard pattern.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Pattern`] when the pattern does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{AbsolutePath, PathOps};
    ///
    /// let path = AbsolutePath::from_string("/foo/bar.txt").unwrap();
    /// assert!(path.matches("*.txt", false).unwrap());
    /// assert!(!path.matches("*.rs", false).unwrap());
    /// ```
    fn matches(&self, pattern: &str, case_sensitive: bool) -> Result<bool> {
        self.matches_with(pattern, case_sensitive, MatchFlags::default())
    }

    /// Whether this path matches a wildcard pattern, with additional
    /// flags.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] when the case-fold flag is
    /// combined with `case_sensitive`, or [`Error::Pattern`] when the
    /// pattern does not compile.
    fn matches_with(&self, pattern: &str, case_sensitive: bool, flags: MatchFlags) -> Result<bool> {
        pattern::wildcard_match(&self.format(ATOM_SEPARATOR), pattern, case_sensitive, flags)
    }

    /// Whether this path's name matches a wildcard pattern.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Pattern`] when the pattern does not compile.
    fn name_matches(&self, pattern: &str, case_sensitive: bool) -> Result<bool> {
        self.name_matches_with(pattern, case_sensitive, MatchFlags::default())
    }

    /// Whether this path's name matches a wildcard pattern, with
    /// additional flags.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PathOps::matches_with`].
    fn name_matches_with(
        &self,
        pattern: &str,
        case_sensitive: bool,
        flags: MatchFlags,
    ) -> Result<bool> {
        pattern::wildcard_match(self.name(), pattern, case_sensitive, flags)
    }

    /// Whether this path's formatted string matches a regular expression.
    #[must_use]
    fn matches_regex(&self, pattern: &Regex) -> bool {
        pattern::regex_match(&self.format(ATOM_SEPARATOR), pattern)
    }

    /// Match this path against a regular expression, returning the match
    /// groups (group 0 is the whole match).
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{AbsolutePath, PathOps};
    /// use regex::Regex;
    ///
    /// let path = AbsolutePath::from_string("/src/lib.rs").unwrap();
    /// let re = Regex::new(r"/(\w+)\.rs$").unwrap();
    /// let groups = path.regex_captures(&re).unwrap();
    /// assert_eq!(groups[1].as_deref(), Some("lib"));
    /// ```
    #[must_use]
    fn regex_captures(&self, pattern: &Regex) -> Option<Vec<Option<String>>> {
        pattern::regex_captures(&self.format(ATOM_SEPARATOR), pattern)
    }

    /// Whether this path's name matches a regular expression.
    #[must_use]
    fn name_matches_regex(&self, pattern: &Regex) -> bool {
        pattern::regex_match(self.name(), pattern)
    }

    /// Match this path's name against a regular expression, returning the
    /// match groups.
    #[must_use]
    fn name_regex_captures(&self, pattern: &Regex) -> Option<Vec<Option<String>>> {
        pattern::regex_captures(self.name(), pattern)
    }

    // Modifiers -----------------------------------------------------------

    /// Join a relative path to this path. The result takes its
    /// trailing-separator flag from the joined path, whose atoms now form
    /// the tail.
    ///
    /// Only relative paths can be joined; passing an absolute path is a
    /// type error, not a runtime check.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when joining the atoms onto
    /// an absolute path would traverse above its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{AbsolutePath, PathOps, RelativePath};
    ///
    /// let base = AbsolutePath::from_string("/path").unwrap();
    /// let tail = RelativePath::from_string("to/some.file").unwrap();
    /// assert_eq!(base.join(&tail).unwrap().format('/'), "/path/to/some.file");
    /// ```
    fn join(&self, path: &RelativePath) -> Result<Self> {
        let data = self
            .data()
            .join_atoms(path.atoms())
            .with_trailing_separator(path.has_trailing_separator());
        self.rebuild(data)
    }

    /// Join already-validated atoms to this path.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when the result would
    /// traverse above an absolute path's root.
    fn join_atoms(&self, atoms: &[Atom]) -> Result<Self> {
        self.rebuild(self.data().join_atoms(atoms))
    }

    /// Join a sequence of raw segments to this path, validating each.
    ///
    /// # Errors
    ///
    /// Fails with an atom validation error for the first invalid segment,
    /// or [`Error::InvalidPathState`] for absolute outbound traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{PathOps, RelativePath};
    ///
    /// let path = RelativePath::from_string("foo").unwrap();
    /// let joined = path.join_atom_sequence(["bar", "baz"]).unwrap();
    /// assert_eq!(joined.format('/'), "foo/bar/baz");
    ///
    /// assert!(path.join_atom_sequence(["in/valid"]).is_err());
    /// ```
    fn join_atom_sequence<I, S>(&self, atoms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rebuild(self.data().join_raw(atoms)?)
    }

    /// Set the trailing-separator flag. Returns an equal value when the
    /// flag is already set, and leaves a zero-atom absolute path (whose
    /// rendering already ends with the separator) unchanged.
    #[must_use]
    fn join_trailing_separator(&self) -> Self {
        if self.data().has_trailing_separator() {
            return self.clone();
        }
        if self.is_absolute_kind() && !self.has_atoms() {
            return self.clone();
        }
        self.rebuild_trusted(self.data().with_trailing_separator(true))
    }

    /// Clear the trailing-separator flag. Returns an equal value when the
    /// flag is already absent.
    #[must_use]
    fn strip_trailing_separator(&self) -> Self {
        if !self.data().has_trailing_separator() {
            return self.clone();
        }
        self.rebuild_trusted(self.data().with_trailing_separator(false))
    }

    /// The parent of this path, a given number of levels up.
    ///
    /// Up to `levels` trailing atoms are removed; for a relative path,
    /// levels beyond the atom count append literal parent atoms.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when the receiver is
    /// absolute and `levels` exceeds its atom count: an absolute path can
    /// never go outbound past its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{AbsolutePath, PathOps, RelativePath};
    ///
    /// let path = AbsolutePath::from_string("/path/to").unwrap();
    /// assert_eq!(path.parent(1).unwrap().format('/'), "/path");
    /// assert!(path.parent(3).is_err());
    ///
    /// let path = RelativePath::from_string("foo").unwrap();
    /// assert_eq!(path.parent(2).unwrap().format('/'), "..");
    /// ```
    fn parent(&self, levels: usize) -> Result<Self> {
        let (mut data, remaining) = self.data().parent(levels);
        if remaining > 0 {
            if self.is_absolute_kind() {
                return Err(Error::InvalidPathState {
                    reason: format!(
                        "cannot go {levels} level(s) up from an absolute path with {} atom(s)",
                        self.atoms().len()
                    ),
                });
            }
            data = data.join_atoms(&vec![Atom::parent(); remaining]);
        }
        self.rebuild(data)
    }

    /// Strip the last extension. A path without an extension is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyAtom`] when stripping would leave an
    /// empty name (a name such as `.htaccess`).
    fn strip_extension(&self) -> Result<Self> {
        self.rebuild(self.data().strip_extension()?)
    }

    /// Strip all extensions. A path without an extension is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PathOps::strip_extension`].
    fn strip_name_suffix(&self) -> Result<Self> {
        self.rebuild(self.data().strip_name_suffix()?)
    }

    /// Join extensions to this path's name.
    ///
    /// # Errors
    ///
    /// Fails when the combined name is not a valid atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{PathOps, RelativePath};
    ///
    /// let path = RelativePath::from_string("path/to/file").unwrap();
    /// let joined = path.join_extensions(["html", "twig"]).unwrap();
    /// assert_eq!(joined.format('/'), "path/to/file.html.twig");
    /// ```
    fn join_extensions<I, S>(&self, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rebuild(self.data().join_extensions(extensions)?)
    }

    /// Suffix this path's name with a string.
    ///
    /// # Errors
    ///
    /// Fails when the combined name is not a valid atom.
    fn suffix_name(&self, suffix: &str) -> Result<Self> {
        self.rebuild(self.data().suffix_name(suffix)?)
    }

    /// Prefix this path's name with a string.
    ///
    /// # Errors
    ///
    /// Fails when the combined name is not a valid atom.
    fn prefix_name(&self, prefix: &str) -> Result<Self> {
        self.rebuild(self.data().prefix_name(prefix)?)
    }

    /// Splice a replacement atom sequence over the range starting at
    /// `index`.
    ///
    /// The replacement may be longer or shorter than the selected range;
    /// out-of-range start indexes clamp to the end of the sequence, so the
    /// path may grow.
    ///
    /// # Errors
    ///
    /// Fails with an atom validation error for invalid replacement
    /// segments, or [`Error::InvalidPathState`] for absolute outbound
    /// traversal.
    fn replace<I, S>(&self, index: isize, replacement: I, length: Option<isize>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rebuild(self.data().replace(index, replacement, length)?)
    }

    /// Replace this path's name (appending when the path has no atoms).
    ///
    /// # Errors
    ///
    /// Fails when the new name is not a valid atom.
    fn replace_name(&self, name: &str) -> Result<Self> {
        self.rebuild(self.data().replace_name(name)?)
    }

    /// Replace this path's name while keeping the last extension.
    ///
    /// # Errors
    ///
    /// Fails when the combined name is not a valid atom.
    fn replace_name_without_extension(&self, base: &str) -> Result<Self> {
        self.rebuild(self.data().replace_name_without_extension(base)?)
    }

    /// Replace this path's name while keeping every extension.
    ///
    /// # Errors
    ///
    /// Fails when the combined name is not a valid atom.
    fn replace_name_prefix(&self, prefix: &str) -> Result<Self> {
        self.rebuild(self.data().replace_name_prefix(prefix)?)
    }

    /// Replace all of this path's extensions.
    ///
    /// # Errors
    ///
    /// Fails when the combined name is not a valid atom.
    fn replace_name_suffix(&self, suffix: &str) -> Result<Self> {
        self.rebuild(self.data().replace_name_suffix(suffix)?)
    }

    /// Replace this path's last extension (appending one when the name has
    /// none).
    ///
    /// # Errors
    ///
    /// Fails when the combined name is not a valid atom.
    fn replace_extension(&self, extension: &str) -> Result<Self> {
        self.rebuild(self.data().replace_extension(extension)?)
    }

    /// Splice a replacement sequence over this path's name atoms.
    ///
    /// # Errors
    ///
    /// Fails when the rebuilt name is not a valid atom.
    fn replace_name_atoms<I, S>(
        &self,
        index: isize,
        replacement: I,
        length: Option<isize>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rebuild(self.data().replace_name_atoms(index, replacement, length)?)
    }

    /// Resolve superfluous `.` and `..` atoms.
    ///
    /// A normalized relative path can still lead with `..` atoms; those
    /// are not resolvable. The trailing-separator flag is preserved, and
    /// the operation is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{PathOps, RelativePath};
    ///
    /// let path = RelativePath::from_string("../a/b/../c").unwrap();
    /// assert_eq!(path.normalize().format('/'), "../a/c");
    /// ```
    #[must_use]
    fn normalize(&self) -> Self {
        self.rebuild_trusted(self.data().normalized())
    }
}

impl<T: sealed::PathCore> PathOps for T {}
