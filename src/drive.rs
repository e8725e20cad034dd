//! Drive letter type for drive-anchored paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated single-letter volume designator.
///
/// Drives are stored upper-cased; `Drive::new('c')` and `Drive::new('C')`
/// produce equal values.
///
/// # Examples
///
/// ```
/// use purepath::Drive;
///
/// let drive = Drive::new('c').unwrap();
/// assert_eq!(drive.letter(), 'C');
///
/// assert!(Drive::new('7').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drive(char);

impl Drive {
    /// Create a new drive from a letter.
    ///
    /// # Errors
    ///
    /// Returns an error if the character is not an ASCII letter.
    pub fn new(letter: char) -> Result<Self, InvalidDriveError> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter.to_ascii_uppercase()))
        } else {
            Err(InvalidDriveError {
                value: letter.to_string(),
            })
        }
    }

    /// Returns the upper-cased drive letter.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Drive {
    type Error = InvalidDriveError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Error type for invalid drive letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDriveError {
    /// The invalid drive value.
    pub value: String,
}

impl fmt::Display for InvalidDriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid drive specifier {:?}: must be a single ASCII letter",
            self.value
        )
    }
}

impl std::error::Error for InvalidDriveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_validation() {
        assert!(Drive::new('a').is_ok());
        assert!(Drive::new('Z').is_ok());
        assert!(Drive::new('0').is_err());
        assert!(Drive::new('/').is_err());
        assert!(Drive::new('é').is_err());
    }

    #[test]
    fn test_drive_upper_cased() {
        assert_eq!(Drive::new('c').unwrap().letter(), 'C');
        assert_eq!(Drive::new('c').unwrap(), Drive::new('C').unwrap());
    }

    #[test]
    fn test_drive_display() {
        assert_eq!(format!("{}", Drive::new('d').unwrap()), "D");
    }

    #[test]
    fn test_drive_serde() {
        let drive = Drive::new('e').unwrap();
        let json = serde_json::to_string(&drive).unwrap();
        assert_eq!(json, "\"E\"");

        let deserialized: Drive = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, drive);
    }
}
