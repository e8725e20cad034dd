//! Path value types and their operation algebra.
//!
//! # Key Concepts
//!
//! ## Atoms
//!
//! A path is an immutable sequence of atoms (validated segments) plus a
//! trailing-separator flag and an optional drive. `/foo/bar` has the atoms
//! `foo` and `bar`.
//!
//! ## Variants
//!
//! Paths come in two kinds, [`RelativePath`] and [`AbsolutePath`], closed
//! over by the [`Path`] enum. Drive-anchored paths are not separate types:
//! the drive is a composed field either kind may carry. Every operation
//! returns a new value of the same variant as its receiver.
//!
//! ## Normalization
//!
//! Normalization resolves `.` atoms and resolvable `..` atoms. It is
//! explicit — construction never normalizes, it only *checks* that an
//! absolute path's normalized form stays inside its root.
//!
//! # Examples
//!
//! ```
//! use purepath::{AbsolutePath, PathOps};
//!
//! let path = AbsolutePath::from_string("/var/log/../www/index.html").unwrap();
//! assert_eq!(path.normalize().format('/'), "/var/www/index.html");
//! assert_eq!(path.extension().as_deref(), Some("html"));
//! ```

pub mod absolute;
pub mod any;
pub(crate) mod data;
pub mod normalize;
pub mod ops;
pub mod pattern;
pub mod relative;
pub mod resolver;
mod serde_impls;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use absolute::AbsolutePath;
pub use any::Path;
pub use ops::PathOps;
pub use pattern::MatchFlags;
pub use relative::RelativePath;
pub use resolver::resolve;
