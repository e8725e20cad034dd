//! The polymorphic path value.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::factory::{default_factory, TargetType};
use crate::parser::PathType;
use crate::path::absolute::AbsolutePath;
use crate::path::data::PathData;
use crate::path::ops::{sealed::PathCore, PathOps};
use crate::path::relative::RelativePath;

/// A path of either kind.
///
/// `Path` is the closed set of path variants; every algebra operation
/// pattern-matches on the variant and produces a value of the same
/// variant. Use [`Path::from_string`] when the kind of the input is not
/// known up front.
///
/// # Examples
///
/// ```
/// use purepath::{Path, PathOps, PathType};
///
/// let path = Path::from_string("/etc/hosts").unwrap();
/// assert_eq!(path.path_type(), PathType::Absolute);
/// assert_eq!(path.name(), "hosts");
///
/// let path = Path::from_string("src/lib.rs").unwrap();
/// assert_eq!(path.path_type(), PathType::Relative);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    /// A relative path.
    Relative(RelativePath),
    /// An absolute path.
    Absolute(AbsolutePath),
}

impl Path {
    /// Parse a path of either kind from a string using the default
    /// factory.
    ///
    /// # Errors
    ///
    /// Fails with an atom validation error or, for absolute input, with
    /// [`Error::InvalidPathState`] on outbound traversal.
    pub fn from_string(raw: &str) -> Result<Self> {
        default_factory().from_string(raw, TargetType::Any)
    }

    /// The kind of this path.
    #[must_use]
    pub fn path_type(&self) -> PathType {
        match self {
            Self::Relative(_) => PathType::Relative,
            Self::Absolute(_) => PathType::Absolute,
        }
    }

    /// Whether this path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }

    /// Whether this path is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Borrow the relative variant, if this is one.
    #[must_use]
    pub fn as_relative(&self) -> Option<&RelativePath> {
        match self {
            Self::Relative(path) => Some(path),
            Self::Absolute(_) => None,
        }
    }

    /// Borrow the absolute variant, if this is one.
    #[must_use]
    pub fn as_absolute(&self) -> Option<&AbsolutePath> {
        match self {
            Self::Absolute(path) => Some(path),
            Self::Relative(_) => None,
        }
    }

    /// Unwrap the relative variant.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::PathTypeMismatch`] when this path is absolute.
    pub fn into_relative(self) -> Result<RelativePath> {
        match self {
            Self::Relative(path) => Ok(path),
            Self::Absolute(_) => Err(Error::PathTypeMismatch {
                expected: PathType::Relative,
                actual: PathType::Absolute,
            }),
        }
    }

    /// Unwrap the absolute variant.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::PathTypeMismatch`] when this path is relative.
    pub fn into_absolute(self) -> Result<AbsolutePath> {
        match self {
            Self::Absolute(path) => Ok(path),
            Self::Relative(_) => Err(Error::PathTypeMismatch {
                expected: PathType::Absolute,
                actual: PathType::Relative,
            }),
        }
    }

    /// An absolute version of this path. An already-absolute path is
    /// returned as an equal value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when the atoms normalize to
    /// a sequence leading with a parent atom.
    pub fn to_absolute(&self) -> Result<Self> {
        match self {
            Self::Absolute(_) => Ok(self.clone()),
            Self::Relative(path) => Ok(Self::Absolute(path.to_absolute()?)),
        }
    }

    /// A relative version of this path. An already-relative path is
    /// returned as an equal value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyPath`] when an absolute path normalizes
    /// to zero atoms.
    pub fn to_relative(&self) -> Result<Self> {
        match self {
            Self::Relative(_) => Ok(self.clone()),
            Self::Absolute(path) => Ok(Self::Relative(path.to_relative()?)),
        }
    }

    /// Resolve the supplied path against this path.
    ///
    /// An absolute argument resolves to itself; a relative argument joins
    /// onto this path. The result is not implicitly normalized. For
    /// drive-aware resolution against an absolute base, see
    /// [`crate::resolve`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when joining onto an
    /// absolute receiver would traverse above its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{Path, PathOps};
    ///
    /// let base = Path::from_string("/foo/bar").unwrap();
    ///
    /// let joined = base.resolve(&Path::from_string("fizz/buzz").unwrap()).unwrap();
    /// assert_eq!(joined.format('/'), "/foo/bar/fizz/buzz");
    ///
    /// let taken = base.resolve(&Path::from_string("/fizz").unwrap()).unwrap();
    /// assert_eq!(taken.format('/'), "/fizz");
    /// ```
    pub fn resolve(&self, path: &Path) -> Result<Self> {
        match path {
            Self::Absolute(_) => Ok(path.clone()),
            Self::Relative(relative) => self.join(relative),
        }
    }
}

impl PathCore for Path {
    fn data(&self) -> &PathData {
        match self {
            Self::Relative(path) => path.data(),
            Self::Absolute(path) => path.data(),
        }
    }

    fn is_absolute_kind(&self) -> bool {
        self.is_absolute()
    }

    fn rebuild(&self, data: PathData) -> Result<Self> {
        match self {
            Self::Relative(path) => Ok(Self::Relative(path.rebuild(data)?)),
            Self::Absolute(path) => Ok(Self::Absolute(path.rebuild(data)?)),
        }
    }

    fn rebuild_trusted(&self, data: PathData) -> Self {
        match self {
            Self::Relative(path) => Self::Relative(path.rebuild_trusted(data)),
            Self::Absolute(path) => Self::Absolute(path.rebuild_trusted(data)),
        }
    }
}

impl From<RelativePath> for Path {
    fn from(path: RelativePath) -> Self {
        Self::Relative(path)
    }
}

impl From<AbsolutePath> for Path {
    fn from(path: AbsolutePath) -> Self {
        Self::Absolute(path)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(crate::atom::ATOM_SEPARATOR))
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_dispatches_on_kind() {
        assert!(Path::from_string("/foo").unwrap().is_absolute());
        assert!(Path::from_string("foo").unwrap().is_relative());
        assert!(Path::from_string("").unwrap().is_relative());
    }

    #[test]
    fn test_operations_preserve_variant() {
        let absolute = Path::from_string("/a/b").unwrap();
        assert!(absolute.parent(1).unwrap().is_absolute());
        assert!(absolute.normalize().is_absolute());
        assert!(absolute.join_trailing_separator().is_absolute());

        let relative = Path::from_string("a/b").unwrap();
        assert!(relative.replace_name("c").unwrap().is_relative());
        assert!(relative.normalize().is_relative());
    }

    #[test]
    fn test_conversion_is_identity_for_matching_kind() {
        let absolute = Path::from_string("/a").unwrap();
        assert_eq!(absolute.to_absolute().unwrap(), absolute);

        let relative = Path::from_string("a").unwrap();
        assert_eq!(relative.to_relative().unwrap(), relative);
    }

    #[test]
    fn test_cross_conversion() {
        let relative = Path::from_string("a/b").unwrap();
        let absolute = relative.to_absolute().unwrap();
        assert!(absolute.is_absolute());
        assert_eq!(absolute.format('/'), "/a/b");

        let back = absolute.to_relative().unwrap();
        assert_eq!(back.format('/'), "a/b");
    }

    #[test]
    fn test_into_variant() {
        let path = Path::from_string("/a").unwrap();
        assert!(path.clone().into_absolute().is_ok());
        assert!(path.into_relative().is_err());
    }

    #[test]
    fn test_as_variant() {
        let path = Path::from_string("a").unwrap();
        assert!(path.as_relative().is_some());
        assert!(path.as_absolute().is_none());
    }

    #[test]
    fn test_join_requires_relative_argument() {
        let base = Path::from_string("/base").unwrap();
        let tail = RelativePath::from_string("x/y").unwrap();
        let joined = base.join(&tail).unwrap();
        assert_eq!(joined.format('/'), "/base/x/y");
    }

    #[test]
    fn test_display() {
        assert_eq!(Path::from_string("/a/b/").unwrap().to_string(), "/a/b/");
        assert_eq!(Path::from_string("a\\b").unwrap().to_string(), "a/b");
    }
}
