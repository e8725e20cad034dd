//! Path construction and variant dispatch.
//!
//! The factory turns strings or raw atom sequences into concrete path
//! values, based on a requested [`TargetType`] token and the parsed shape
//! of the input. Configuration is an explicit [`ParseOptions`] value
//! threaded through construction; [`default_factory`] provides a
//! process-wide convenience instance that is lazily initialized exactly
//! once and read-shared afterwards.

use std::sync::OnceLock;

use crate::drive::Drive;
use crate::error::{Error, Result};
use crate::parser::{ParseOptions, Parser, ParsingResult, PathType};
use crate::path::absolute::AbsolutePath;
use crate::path::any::Path;
use crate::path::data::PathData;
use crate::path::relative::RelativePath;

/// The requested path type for a construction call.
///
/// Drive-anchored targets additionally require a drive to be present
/// (parsed from the string, or supplied alongside the atoms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Accept whichever kind the input has.
    Any,
    /// Require a relative path.
    Relative,
    /// Require an absolute path.
    Absolute,
    /// Require a relative path carrying a drive.
    RelativeDriveAnchored,
    /// Require an absolute path carrying a drive.
    AbsoluteDriveAnchored,
}

impl TargetType {
    /// Whether this target requires a drive.
    #[must_use]
    pub fn expects_drive(self) -> bool {
        matches!(self, Self::RelativeDriveAnchored | Self::AbsoluteDriveAnchored)
    }

    /// The path kind this target constrains the input to, if any.
    #[must_use]
    pub fn required_type(self) -> Option<PathType> {
        match self {
            Self::Any => None,
            Self::Relative | Self::RelativeDriveAnchored => Some(PathType::Relative),
            Self::Absolute | Self::AbsoluteDriveAnchored => Some(PathType::Absolute),
        }
    }
}

/// Constructs concrete path values from strings or atoms.
///
/// # Examples
///
/// ```
/// use purepath::{ParseOptions, PathFactory, PathOps, TargetType};
///
/// let factory = PathFactory::new(ParseOptions::default());
///
/// let path = factory.from_string("/foo/bar", TargetType::Any).unwrap();
/// assert!(path.is_absolute());
///
/// let path = factory
///     .from_string("C:\\test\\drive", TargetType::AbsoluteDriveAnchored)
///     .unwrap();
/// assert_eq!(path.format('/'), "C:/test/drive");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathFactory {
    options: ParseOptions,
    parser: Parser,
}

impl PathFactory {
    /// Create a factory with the given parse configuration.
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            parser: Parser::new(),
        }
    }

    /// The factory's parse configuration.
    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a string and construct the concrete path value the target
    /// asks for.
    ///
    /// Drive-anchored targets enable windows-drive recognition for the
    /// parse; the neutral [`TargetType::Any`] dispatches on the parsed
    /// kind.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingDrive`] when a drive-anchored target
    /// finds no drive, [`Error::PathTypeMismatch`] when a strict target
    /// parses the other kind, [`Error::InvalidPathState`] for absolute
    /// outbound traversal, or an atom validation error.
    pub fn from_string(&self, raw: &str, target: TargetType) -> Result<Path> {
        let expects_drive = target.expects_drive();
        let options = if expects_drive {
            self.options.clone().with_parse_windows_drive(true)
        } else {
            self.options.clone()
        };

        let result = self.parser.parse(raw, &options);

        if expects_drive && result.drive.is_none() {
            return Err(Error::MissingDrive {
                reason: format!("path {raw:?} is expected to have a drive, but has none"),
            });
        }

        if let Some(required) = target.required_type() {
            if required != result.path_type {
                return Err(Error::PathTypeMismatch {
                    expected: required,
                    actual: result.path_type,
                });
            }
        }

        log::trace!("dispatching {raw:?} to {:?} variant", result.path_type);
        build(result)
    }

    /// Construct a concrete path value from raw atom segments.
    ///
    /// `TargetType::Any` is not meaningful here: with no string to parse
    /// there is no detected kind to dispatch on.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] for `TargetType::Any`,
    /// [`Error::MissingDrive`] when a drive-anchored target is given no
    /// drive, [`Error::InvalidPathState`] for absolute outbound
    /// traversal, or an atom validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{ParseOptions, PathFactory, PathOps, TargetType};
    ///
    /// let factory = PathFactory::new(ParseOptions::default());
    /// let path = factory
    ///     .from_atoms(["foo", "bar"], TargetType::Absolute, true, None)
    ///     .unwrap();
    /// assert_eq!(path.format('/'), "/foo/bar/");
    /// ```
    pub fn from_atoms<I, S>(
        &self,
        atoms: I,
        target: TargetType,
        has_trailing_separator: bool,
        drive: Option<Drive>,
    ) -> Result<Path>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let required = target.required_type().ok_or_else(|| Error::InvalidArgument {
            reason: "from_atoms requires a concrete target type, not TargetType::Any".to_string(),
        })?;

        if target.expects_drive() && drive.is_none() {
            return Err(Error::MissingDrive {
                reason: "cannot construct a drive-anchored path without a drive".to_string(),
            });
        }

        let data = PathData::from_raw(atoms, has_trailing_separator, drive)?;
        match required {
            PathType::Relative => Ok(Path::Relative(RelativePath::from_data(data))),
            PathType::Absolute => Ok(Path::Absolute(AbsolutePath::from_data(data)?)),
        }
    }
}

/// Build the concrete variant matching a parse result's kind.
pub(crate) fn build(result: ParsingResult) -> Result<Path> {
    let data = PathData::from_raw(result.atoms, result.has_trailing_separator, result.drive)?;
    match result.path_type {
        PathType::Relative => Ok(Path::Relative(RelativePath::from_data(data))),
        PathType::Absolute => Ok(Path::Absolute(AbsolutePath::from_data(data)?)),
    }
}

/// The process-wide default factory, using default parse options.
///
/// Lazily initialized exactly once; safe to read-share afterwards. There
/// is deliberately no way to replace it — code needing different options
/// should construct and thread its own [`PathFactory`].
pub fn default_factory() -> &'static PathFactory {
    static DEFAULT: OnceLock<PathFactory> = OnceLock::new();
    DEFAULT.get_or_init(|| PathFactory::new(ParseOptions::default()))
}
