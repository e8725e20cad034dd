//! Path atom type and validation.
//!
//! An atom is a single path segment: the path `/foo/bar` has the atoms
//! `foo` and `bar`. Atoms are non-empty and never contain the canonical
//! separator character.

use std::fmt;

/// The character used to separate path atoms in canonical form.
pub const ATOM_SEPARATOR: char = '/';

/// The character used to separate name atoms (extensions).
pub const EXTENSION_SEPARATOR: char = '.';

/// The atom used to represent 'parent'.
pub const PARENT_ATOM: &str = "..";

/// The atom used to represent 'self'.
pub const SELF_ATOM: &str = ".";

/// A validated path segment.
///
/// An atom is a non-empty string containing no canonical separator. The
/// special atoms `.` (self) and `..` (parent) are valid atoms; the parser
/// discards self atoms and the normalizer resolves parent atoms.
///
/// # Examples
///
/// ```
/// use purepath::Atom;
///
/// let atom = Atom::new("src").unwrap();
/// assert_eq!(atom.as_str(), "src");
///
/// // Empty atoms are invalid
/// assert!(Atom::new("").is_err());
///
/// // Atoms never contain the separator
/// assert!(Atom::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(String);

impl Atom {
    /// Create a new atom after validation.
    ///
    /// # Errors
    ///
    /// Returns [`AtomError::Empty`] for the empty string and
    /// [`AtomError::ContainsSeparator`] if the atom contains the canonical
    /// separator. Input that has not yet been canonicalized (e.g. raw
    /// Windows-style strings) must go through the parser first.
    pub fn new(atom: impl Into<String>) -> Result<Self, AtomError> {
        let atom = atom.into();
        if atom.is_empty() {
            Err(AtomError::Empty)
        } else if atom.contains(ATOM_SEPARATOR) {
            Err(AtomError::ContainsSeparator { atom })
        } else {
            Ok(Self(atom))
        }
    }

    /// The parent atom (`..`).
    #[must_use]
    pub fn parent() -> Self {
        Self(PARENT_ATOM.to_string())
    }

    /// The self atom (`.`).
    #[must_use]
    pub fn self_atom() -> Self {
        Self(SELF_ATOM.to_string())
    }

    /// Returns the atom as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the atom, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if this is the parent atom (`..`).
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::Atom;
    ///
    /// assert!(Atom::parent().is_parent());
    /// assert!(!Atom::new("up").unwrap().is_parent());
    /// ```
    #[must_use]
    pub fn is_parent(&self) -> bool {
        self.0 == PARENT_ATOM
    }

    /// Returns `true` if this is the self atom (`.`).
    #[must_use]
    pub fn is_self(&self) -> bool {
        self.0 == SELF_ATOM
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Atom {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Atom {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for Atom {
    type Error = AtomError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Atom {
    type Error = AtomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Error type for invalid path atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomError {
    /// The atom was the empty string.
    Empty,
    /// The atom contained a separator character.
    ContainsSeparator {
        /// The offending atom.
        atom: String,
    },
}

impl fmt::Display for AtomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path atom must not be empty"),
            Self::ContainsSeparator { atom } => {
                write!(f, "path atom {atom:?} contains a separator")
            }
        }
    }
}

impl std::error::Error for AtomError {}

/// Validate a sequence of raw strings into atoms.
///
/// Fails on the first invalid segment; used by every atom-producing
/// operation before a new path is built.
///
/// # Errors
///
/// Returns the error of the first segment that fails [`Atom::new`].
pub fn validate_atoms<I, S>(atoms: I) -> Result<Vec<Atom>, AtomError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    atoms.into_iter().map(Atom::new).collect()
}
