//! Base-path resolution.
//!
//! Resolution combines an absolute base path with another path to produce
//! an absolute result. The result is not implicitly normalized; callers
//! normalize explicitly when they want a canonical form.

use crate::error::Result;
use crate::path::absolute::AbsolutePath;
use crate::path::any::Path;
use crate::path::ops::PathOps;

/// Resolve `path` against `base`.
///
/// The rules, in order:
///
/// 1. An absolute `path` resolves to itself, even when its drive differs
///    from the base's — drives are never substituted.
/// 2. An anchored relative `path` (separator-led but driveless) is rooted
///    at the base's drive: the result has the path's atoms and the base's
///    drive.
/// 3. A relative `path` carrying a drive different from the base's
///    resolves to the path made absolute on its own drive — bases of
///    different drives are never combined.
/// 4. Anything else joins onto the base.
///
/// # Errors
///
/// Fails with [`crate::Error::InvalidPathState`] when the produced
/// absolute path would traverse above its root.
///
/// # Examples
///
/// ```
/// use purepath::{resolve, AbsolutePath, Path, PathOps};
///
/// let base = AbsolutePath::from_string("/var/www").unwrap();
///
/// let resolved = resolve(&base, &Path::from_string("html/index.html").unwrap()).unwrap();
/// assert_eq!(resolved.format('/'), "/var/www/html/index.html");
///
/// let resolved = resolve(&base, &Path::from_string("/etc/hosts").unwrap()).unwrap();
/// assert_eq!(resolved.format('/'), "/etc/hosts");
/// ```
pub fn resolve(base: &AbsolutePath, path: &Path) -> Result<AbsolutePath> {
    match path {
        Path::Absolute(path) => Ok(path.clone()),
        Path::Relative(path) => {
            if path.is_anchored() {
                log::trace!("anchoring {path} to the base drive {:?}", base.drive());
                return path.with_drive(base.drive()).to_absolute();
            }
            match path.drive() {
                Some(drive) if base.drive() != Some(drive) => path.to_absolute(),
                _ => base.join(path),
            }
        }
    }
}
