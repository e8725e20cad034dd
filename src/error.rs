//! Error types for the purepath library.
//!
//! This module provides the error hierarchy for all path operations,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::parser::PathType;

/// Result type alias for operations that may fail with a purepath error.
///
/// # Examples
///
/// ```
/// use purepath::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the purepath library.
///
/// This enum encompasses all possible error conditions that can occur
/// while parsing, constructing, or manipulating path values. Every error
/// is surfaced synchronously to the caller; nothing is retried and nothing
/// is treated as process-fatal by the library itself.
#[derive(Debug, Error)]
pub enum Error {
    /// A path atom was the empty string.
    #[error("path atom must not be empty")]
    EmptyAtom,

    /// A path atom contained a separator character.
    #[error("path atom {atom:?} contains a separator")]
    AtomContainsSeparator {
        /// The offending atom.
        atom: String,
    },

    /// A drive specifier was not a single ASCII letter.
    #[error("invalid drive specifier {value:?}: must be a single ASCII letter")]
    InvalidDrive {
        /// The invalid drive value.
        value: String,
    },

    /// A constructed path would be structurally invalid.
    ///
    /// Raised when an absolute path's normalized form would begin with a
    /// parent atom, or when `parent()` would push an absolute path above
    /// its root.
    #[error("invalid path state: {reason}")]
    InvalidPathState {
        /// Why the path is invalid.
        reason: String,
    },

    /// A drive-anchored path was requested without a determinable drive.
    #[error("missing drive: {reason}")]
    MissingDrive {
        /// Why no drive could be determined.
        reason: String,
    },

    /// The caller requested one path kind but the input was the other.
    #[error("path type mismatch: expected {expected} path, found {actual} path")]
    PathTypeMismatch {
        /// The path kind the caller requested.
        expected: PathType,
        /// The path kind the input actually had.
        actual: PathType,
    },

    /// An index-based atom accessor referenced a position outside the
    /// atom sequence.
    #[error("undefined atom index {index} (path has {len} atom(s))")]
    UndefinedAtomIndex {
        /// The requested index, as supplied (may be negative).
        index: isize,
        /// The number of atoms in the sequence.
        len: usize,
    },

    /// An operation requiring at least one atom was invoked on a
    /// zero-atom path.
    #[error("empty path: {reason}")]
    EmptyPath {
        /// Why the operation needs a non-empty path.
        reason: String,
    },

    /// The caller passed contradictory or nonsensical flags.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// A description of the contradiction.
        reason: String,
    },

    /// A wildcard pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] globset::Error),
}

impl Error {
    /// Check if this error indicates an invalid atom.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::Error;
    ///
    /// assert!(Error::EmptyAtom.is_invalid_atom());
    /// ```
    #[must_use]
    pub fn is_invalid_atom(&self) -> bool {
        matches!(self, Self::EmptyAtom | Self::AtomContainsSeparator { .. })
    }

    /// Check if this error indicates a path-kind mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{AbsolutePath, Error};
    ///
    /// let err = AbsolutePath::from_string("relative/path").unwrap_err();
    /// assert!(err.is_type_mismatch());
    /// ```
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::PathTypeMismatch { .. })
    }
}

impl From<crate::atom::AtomError> for Error {
    fn from(err: crate::atom::AtomError) -> Self {
        match err {
            crate::atom::AtomError::Empty => Self::EmptyAtom,
            crate::atom::AtomError::ContainsSeparator { atom } => {
                Self::AtomContainsSeparator { atom }
            }
        }
    }
}

impl From<crate::drive::InvalidDriveError> for Error {
    fn from(err: crate::drive::InvalidDriveError) -> Self {
        Self::InvalidDrive { value: err.value }
    }
}
