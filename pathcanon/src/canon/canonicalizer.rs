//! The canonicalizer front door.
//!
//! This module provides the `Canonicalizer` type, which binds a path style
//! to the canonicalization pipeline and optionally traces the component
//! tables through the `log` facade.

use crate::canon::canonicalize::canonicalize_traced;
use crate::canon::types::CanonicalPath;
use crate::error::Result;
use crate::style::PathStyle;

/// Canonicalizes paths of a fixed style.
///
/// A `Canonicalizer` is cheap to construct and clone, keeps no state
/// between calls, and never touches the filesystem.
///
/// # Examples
///
/// ```
/// use pathcanon::{Canonicalizer, PathStyle};
///
/// let canonicalizer = Canonicalizer::new(PathStyle::Posix);
/// let path = canonicalizer.canonicalize("/abc/../123").unwrap();
/// assert_eq!(path.as_str(), "/123");
/// ```
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    /// The style paths are canonicalized under.
    style: PathStyle,
    /// Whether to emit component tables at debug level.
    trace: bool,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(PathStyle::Posix)
    }
}

impl Canonicalizer {
    /// Create a canonicalizer for the given style.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::{Canonicalizer, PathStyle};
    ///
    /// let canonicalizer = Canonicalizer::new(PathStyle::Efi);
    /// ```
    #[must_use]
    pub const fn new(style: PathStyle) -> Self {
        Self {
            style,
            trace: false,
        }
    }

    /// The style this canonicalizer applies.
    #[must_use]
    pub const fn style(&self) -> PathStyle {
        self.style
    }

    /// Configure component-table tracing.
    ///
    /// When enabled, the split component table and the survivor set are
    /// emitted through the `log` facade at debug level. Tracing never
    /// affects results.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::{Canonicalizer, PathStyle};
    ///
    /// let canonicalizer = Canonicalizer::new(PathStyle::Posix)
    ///     .with_trace(true);
    /// ```
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Canonicalize a path.
    ///
    /// The input is borrowed and never modified; on failure the caller's
    /// string is intact and no partial result exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) if a `..`
    /// would ascend past the start of the path, or (POSIX only) if the
    /// input is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::{Canonicalizer, PathStyle};
    ///
    /// let canonicalizer = Canonicalizer::new(PathStyle::Efi);
    /// let path = canonicalizer.canonicalize("fs0:abc\\.\\123").unwrap();
    /// assert_eq!(path.as_str(), "fs0:abc\\123");
    /// assert_eq!(path.volume_prefix(), Some("fs0:"));
    ///
    /// assert!(canonicalizer.canonicalize("..\\abc").is_err());
    /// ```
    pub fn canonicalize(&self, path: &str) -> Result<CanonicalPath> {
        let canonical = canonicalize_traced(path, self.style, self.trace)?;
        Ok(CanonicalPath::new(canonical, path.to_string(), self.style))
    }
}

/// Canonicalize a POSIX-style path (`/` separators, no volume prefix).
///
/// Convenience for `Canonicalizer::new(PathStyle::Posix).canonicalize(path)`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) if a `..`
/// would ascend past the start of the path, or if the input is empty.
///
/// # Examples
///
/// ```
/// use pathcanon::canonicalize_posix;
///
/// let path = canonicalize_posix("abc////..////z////").unwrap();
/// assert_eq!(path.as_str(), "z");
/// ```
pub fn canonicalize_posix(path: &str) -> Result<CanonicalPath> {
    Canonicalizer::new(PathStyle::Posix).canonicalize(path)
}

/// Canonicalize an EFI-style path (`\` separators, optional `volume:` prefix).
///
/// Convenience for `Canonicalizer::new(PathStyle::Efi).canonicalize(path)`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) if a `..`
/// would ascend past the start of the path.
///
/// # Examples
///
/// ```
/// use pathcanon::canonicalize_efi;
///
/// let path = canonicalize_efi("c:.\\abc").unwrap();
/// assert_eq!(path.as_str(), "c:abc");
/// ```
pub fn canonicalize_efi(path: &str) -> Result<CanonicalPath> {
    Canonicalizer::new(PathStyle::Efi).canonicalize(path)
}
