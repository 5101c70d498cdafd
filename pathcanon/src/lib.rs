#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathcanon
//!
//! A library for lexical canonicalization of path strings.
//!
//! Canonicalization resolves `.` and `..` components, collapses repeated
//! separators, and rejects paths that would ascend above their root. It is
//! purely textual: the filesystem is never consulted and symlinks are not
//! resolved. Two path styles are supported, driven by one algorithm:
//!
//! - **POSIX**: `/` separators, no volume prefix
//! - **EFI**: `\` separators, optional opaque `volume:` prefix that is
//!   passed through unmodified
//!
//! ## Core Types
//!
//! - [`PathStyle`]: separator and volume-prefix conventions
//! - [`Canonicalizer`] and [`CanonicalPath`]: the front door and its result
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathcanon::{canonicalize_efi, canonicalize_posix};
//!
//! let path = canonicalize_posix("/abc/./x/../123").unwrap();
//! assert_eq!(path.as_str(), "/abc/123");
//!
//! let path = canonicalize_efi("fs0:abc\\..\\z").unwrap();
//! assert_eq!(path.as_str(), "fs0:z");
//!
//! // Ascending above the start of the path is invalid
//! assert!(canonicalize_posix("../123").is_err());
//! ```

pub mod canon;
pub mod error;
pub mod logging;
pub mod style;

// Re-export key types at crate root for convenience
pub use canon::{
    canonicalize, canonicalize_efi, canonicalize_posix, component_table, rebuild_path,
    resolve_components, split_components, split_volume_prefix, CanonicalPath, Canonicalizer,
    Component, ComponentKind,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use style::PathStyle;
