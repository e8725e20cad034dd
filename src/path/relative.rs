//! Relative path values.

use std::fmt;
use std::str::FromStr;

use crate::drive::Drive;
use crate::error::{Error, Result};
use crate::factory::{default_factory, TargetType};
use crate::path::absolute::AbsolutePath;
use crate::path::data::PathData;
use crate::path::ops::{sealed::PathCore, PathOps};

/// An immutable relative path.
///
/// A relative path is interpreted against some base. It may carry leading
/// parent atoms (`..`) after normalization, an optional drive (a
/// drive-relative path such as `C:foo`), and an `anchored` flag marking it
/// as rooted at whichever drive applies during resolution.
///
/// # Examples
///
/// ```
/// use purepath::{PathOps, RelativePath};
///
/// let path = RelativePath::from_string("path/to/file").unwrap();
/// assert_eq!(path.name(), "file");
/// assert_eq!(path.parent(1).unwrap().format('/'), "path/to");
///
/// // Absolute input is a type mismatch
/// assert!(RelativePath::from_string("/path").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath {
    data: PathData,
    anchored: bool,
}

impl RelativePath {
    /// Parse a relative path from a string using the default factory.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::PathTypeMismatch`] when the string represents
    /// an absolute path, or with an atom validation error.
    pub fn from_string(raw: &str) -> Result<Self> {
        default_factory()
            .from_string(raw, TargetType::Relative)?
            .into_relative()
    }

    /// Build a relative path from raw segments, validating each.
    ///
    /// # Errors
    ///
    /// Fails with an atom validation error for the first invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{PathOps, RelativePath};
    ///
    /// let path = RelativePath::from_atoms(["foo", "bar"], false).unwrap();
    /// assert_eq!(path.format('/'), "foo/bar");
    /// ```
    pub fn from_atoms<I, S>(atoms: I, has_trailing_separator: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_data(PathData::from_raw(
            atoms,
            has_trailing_separator,
            None,
        )?))
    }

    pub(crate) fn from_data(data: PathData) -> Self {
        Self {
            data,
            anchored: false,
        }
    }

    /// Whether this path is anchored: separator-led relative to the root
    /// of whichever drive applies at resolution time.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Set or clear the anchored flag.
    ///
    /// The parser never produces anchored paths (separator-led input
    /// parses as absolute); the flag exists for explicit construction and
    /// is consumed by base-path resolution.
    #[must_use]
    pub fn with_anchored(&self, anchored: bool) -> Self {
        Self {
            data: self.data.clone(),
            anchored,
        }
    }

    /// Replace this path's drive.
    #[must_use]
    pub fn with_drive(&self, drive: Option<Drive>) -> Self {
        Self {
            data: self.data.with_drive(drive),
            anchored: self.anchored,
        }
    }

    /// An absolute version of this path, preserving atoms, drive, and the
    /// trailing-separator flag.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPathState`] when the atoms normalize to
    /// a sequence leading with a parent atom: an absolute path cannot go
    /// outbound past its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{PathOps, RelativePath};
    ///
    /// let path = RelativePath::from_string("foo/bar").unwrap();
    /// assert_eq!(path.to_absolute().unwrap().format('/'), "/foo/bar");
    ///
    /// let outbound = RelativePath::from_string("../foo").unwrap();
    /// assert!(outbound.to_absolute().is_err());
    /// ```
    pub fn to_absolute(&self) -> Result<AbsolutePath> {
        AbsolutePath::from_data(self.data.clone())
    }
}

impl PathCore for RelativePath {
    fn data(&self) -> &PathData {
        &self.data
    }

    fn is_absolute_kind(&self) -> bool {
        false
    }

    fn rebuild(&self, data: PathData) -> Result<Self> {
        Ok(Self {
            data,
            anchored: self.anchored,
        })
    }

    fn rebuild_trusted(&self, data: PathData) -> Self {
        Self {
            data,
            anchored: self.anchored,
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(crate::atom::ATOM_SEPARATOR))
    }
}

impl FromStr for RelativePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
