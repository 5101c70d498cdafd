//! Core types for canonicalization results.

use std::fmt;

use serde::Serialize;

use crate::canon::volume::split_volume_prefix;
use crate::style::PathStyle;

/// A canonicalized path together with the input it came from.
///
/// The canonical form has all `.` and `..` components resolved, separator
/// runs collapsed, and no trailing separator; an EFI volume prefix, if the
/// input had one, is carried through unmodified.
///
/// # Examples
///
/// ```
/// use pathcanon::canonicalize_posix;
///
/// let path = canonicalize_posix("/abc/./x/../123").unwrap();
/// assert_eq!(path.as_str(), "/abc/123");
/// assert_eq!(path.original(), "/abc/./x/../123");
/// assert!(path.is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalPath {
    /// The canonical form.
    canonical: String,
    /// The input as it was given.
    original: String,
    /// The style the path was canonicalized under.
    style: PathStyle,
}

impl CanonicalPath {
    /// Create a canonical path record.
    ///
    /// Callers go through [`canonicalize`](crate::canonicalize) or
    /// [`Canonicalizer`](crate::Canonicalizer); the constructor is not
    /// exposed because `canonical` must actually be canonical.
    pub(crate) fn new(canonical: String, original: String, style: PathStyle) -> Self {
        Self {
            canonical,
            original,
            style,
        }
    }

    /// The canonical form as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::canonicalize_efi;
    ///
    /// let path = canonicalize_efi("fs0:\\abc\\.\\123").unwrap();
    /// assert_eq!(path.as_str(), "fs0:\\abc\\123");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// The original input, exactly as it was given.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The style the path was canonicalized under.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The volume prefix of the canonical form, if the style has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::{canonicalize_efi, canonicalize_posix};
    ///
    /// let path = canonicalize_efi("fs0:\\abc").unwrap();
    /// assert_eq!(path.volume_prefix(), Some("fs0:"));
    ///
    /// let path = canonicalize_posix("/abc").unwrap();
    /// assert_eq!(path.volume_prefix(), None);
    /// ```
    #[must_use]
    pub fn volume_prefix(&self) -> Option<&str> {
        if self.style.supports_volume_prefix() {
            split_volume_prefix(&self.canonical).0
        } else {
            None
        }
    }

    /// Whether the canonical form is absolute (post-prefix).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::canonicalize_efi;
    ///
    /// assert!(canonicalize_efi("c:\\abc").unwrap().is_absolute());
    /// assert!(!canonicalize_efi("c:abc").unwrap().is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        let remainder = if self.style.supports_volume_prefix() {
            split_volume_prefix(&self.canonical).1
        } else {
            self.canonical.as_str()
        };
        remainder.starts_with(self.style.separator())
    }

    /// Convert into the canonical `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::canonicalize_posix;
    ///
    /// let path = canonicalize_posix("abc//123").unwrap();
    /// assert_eq!(path.into_string(), "abc/123");
    /// ```
    #[must_use]
    pub fn into_string(self) -> String {
        self.canonical
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}
