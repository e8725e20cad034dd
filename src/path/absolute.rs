//! Absolute path values.

use std::fmt;
use std::str::FromStr;

use crate::atom::Atom;
use crate::drive::Drive;
use crate::error::{Error, Result};
use crate::factory::{default_factory, TargetType};
use crate::path::any::Path;
use crate::path::data::PathData;
use crate::path::normalize::normalize_atoms;
use crate::path::ops::{sealed::PathCore, PathOps};
use crate::path::relative::RelativePath;
use crate::path::resolver;

/// An immutable absolute path.
///
/// An absolute path starts at a root (optionally a drive root) and can
/// never traverse above it: constructing a value whose normalized atoms
/// would lead with a parent atom fails, as does a `parent()` call that
/// would go outbound.
///
/// # Examples
///
/// ```
/// use purepath::{AbsolutePath, PathOps};
///
/// let path = AbsolutePath::from_string("/foo/../bar/./").unwrap();
/// assert_eq!(path.normalize().format('/'), "/bar/");
///
/// // Outbound traversal is rejected at construction
/// assert!(AbsolutePath::from_string("/..").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsolutePath {
    data: PathData,
}

impl AbsolutePath {
    /// Parse an absolute path from a string using the default factory.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::PathTypeMismatch`] when the string represents
    /// a relative path, with [`Error::InvalidPathState`] for outbound
    /// traversal, or with an atom validation error.
    pub fn from_string(raw: &str) -> Result<Self> {
        default_factory()
            .from_string(raw, TargetType::Absolute)?
            .into_absolute()
    }

    /// Build an absolute path from raw segments, validating each.
    ///
    /// # Errors
    ///
    /// Fails with an atom validation error for the first invalid segment,
    /// or [`Error::InvalidPathState`] for outbound traversal.
    pub fn from_atoms<I, S>(atoms: I, has_trailing_separator: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_data(PathData::from_raw(atoms, has_trailing_separator, None)?)
    }

    /// Construct from shared data, enforcing the root invariant.
    pub(crate) fn from_data(data: PathData) -> Result<Self> {
        if normalize_atoms(data.atoms()).first().is_some_and(Atom::is_parent) {
            return Err(Error::InvalidPathState {
                reason: "absolute path cannot traverse above its root".to_string(),
            });
        }
        Ok(Self { data })
    }

    /// Replace this path's drive.
    #[must_use]
    pub fn with_drive(&self, drive: Option<Drive>) -> Self {
        Self {
            data: self.data.with_drive(drive),
        }
    }

    /// Whether this path is the root: an absolute path whose normalized
    /// form has no atoms.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::AbsolutePath;
    ///
    /// assert!(AbsolutePath::from_string("/").unwrap().is_root());
    /// assert!(AbsolutePath::from_string("/foo/..").unwrap().is_root());
    /// assert!(!AbsolutePath::from_string("/foo").unwrap().is_root());
    /// ```
    #[must_use]
    pub fn is_root(&self) -> bool {
        normalize_atoms(self.data.atoms()).is_empty()
    }

    /// Whether this path is the direct parent of the supplied path,
    /// comparing normalized forms.
    #[must_use]
    pub fn is_parent_of(&self, path: &AbsolutePath) -> bool {
        let child = normalize_atoms(path.data.atoms());
        !child.is_empty()
            && normalize_atoms(self.data.atoms()) == child[..child.len() - 1]
    }

    /// Whether this path is an ancestor of the supplied path, comparing
    /// normalized forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::AbsolutePath;
    ///
    /// let base = AbsolutePath::from_string("/foo").unwrap();
    /// let deep = AbsolutePath::from_string("/foo/bar/baz").unwrap();
    /// assert!(base.is_ancestor_of(&deep));
    /// assert!(!deep.is_ancestor_of(&base));
    /// ```
    #[must_use]
    pub fn is_ancestor_of(&self, path: &AbsolutePath) -> bool {
        let ancestor = normalize_atoms(self.data.atoms());
        let child = normalize_atoms(path.data.atoms());
        child.len() >= ancestor.len() && ancestor == child[..ancestor.len()]
    }

    /// A relative version of this path, preserving atoms, drive, and the
    /// trailing-separator flag.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyPath`] when this path normalizes to zero
    /// atoms: there is no meaningful relative form of the root.
    pub fn to_relative(&self) -> Result<RelativePath> {
        if self.is_root() {
            return Err(Error::EmptyPath {
                reason: "the root path has no relative form".to_string(),
            });
        }
        Ok(RelativePath::from_data(self.data.clone()))
    }

    /// The shortest path from the supplied path to this path.
    ///
    /// Given this path `/foo/bar` and the supplied path `/foo/baz`, the
    /// result is `../bar`. Equal paths diff to the self atom (`.`). The
    /// result never carries a drive.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when the two paths are
    /// anchored to different drives: no relative path connects them.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{AbsolutePath, PathOps};
    ///
    /// let child = AbsolutePath::from_string("/foo/bar").unwrap();
    /// let base = AbsolutePath::from_string("/foo/baz").unwrap();
    /// assert_eq!(child.relative_to(&base).unwrap().format('/'), "../bar");
    /// ```
    pub fn relative_to(&self, base: &AbsolutePath) -> Result<RelativePath> {
        if self.drive() != base.drive() {
            return Err(Error::InvalidPathState {
                reason: "paths on different drives have no relative form".to_string(),
            });
        }

        let base_atoms = normalize_atoms(base.data.atoms());
        let child_atoms = normalize_atoms(self.data.atoms());

        let diff = if base_atoms == child_atoms {
            vec![Atom::self_atom()]
        } else {
            let shared = base_atoms
                .iter()
                .zip(&child_atoms)
                .take_while(|(a, b)| a == b)
                .count();
            let mut diff = vec![Atom::parent(); base_atoms.len() - shared];
            diff.extend_from_slice(&child_atoms[shared..]);
            diff
        };

        Ok(RelativePath::from_data(PathData::new(diff, false, None)))
    }

    /// Resolve the supplied path against this path.
    ///
    /// See [`resolver::resolve`] for the resolution rules.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when the joined atoms would
    /// traverse above this path's root.
    pub fn resolve(&self, path: &Path) -> Result<AbsolutePath> {
        resolver::resolve(self, path)
    }
}

impl PathCore for AbsolutePath {
    fn data(&self) -> &PathData {
        &self.data
    }

    fn is_absolute_kind(&self) -> bool {
        true
    }

    fn rebuild(&self, data: PathData) -> Result<Self> {
        Self::from_data(data)
    }

    fn rebuild_trusted(&self, data: PathData) -> Self {
        Self { data }
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(crate::atom::ATOM_SEPARATOR))
    }
}

impl FromStr for AbsolutePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
