//! Lexical path canonicalization.
//!
//! This module implements the canonicalization pipeline shared by the
//! POSIX and EFI path styles. The pipeline is purely textual: it never
//! touches the filesystem, resolves no symlinks, and keeps no state
//! across calls.
//!
//! # Pipeline
//!
//! 1. **Volume prefix** (EFI only): everything up to and including the
//!    first `:` is split off and later re-attached verbatim.
//! 2. **Splitting**: the path is broken into components on the separator.
//!    Splitting is lossless; consecutive separators yield zero-length
//!    components.
//! 3. **Resolution**: one left-to-right pass elides `.` and empty
//!    components and lets each `..` cancel its nearest surviving
//!    predecessor. A `..` with nothing left to cancel invalidates the
//!    whole path.
//! 4. **Reconstruction**: survivors are joined by single separators,
//!    keeping the input's absolute or relative status.
//!
//! # Examples
//!
//! ```
//! use pathcanon::{canonicalize_efi, canonicalize_posix};
//!
//! let path = canonicalize_posix("d/./e/.././o/f/g/./h/../../.././n/././e/./i/..").unwrap();
//! assert_eq!(path.as_str(), "d/o/n/e");
//!
//! let path = canonicalize_efi("fs0:\\efi\\boot\\..\\shell").unwrap();
//! assert_eq!(path.as_str(), "fs0:\\shell");
//!
//! assert!(canonicalize_posix("../escape").is_err());
//! ```

pub mod canonicalize;
pub mod canonicalizer;
pub mod component;
mod types;
pub mod volume;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use canonicalize::{canonicalize, rebuild_path, resolve_components};
pub use canonicalizer::{canonicalize_efi, canonicalize_posix, Canonicalizer};
pub use component::{component_table, split_components, Component, ComponentKind};
pub use types::CanonicalPath;
pub use volume::split_volume_prefix;
