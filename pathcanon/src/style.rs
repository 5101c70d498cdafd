//! Path style definitions.
//!
//! A path style bundles the two conventions that distinguish the supported
//! path flavors: the separator character and whether an opaque volume
//! prefix (`volume:`) may precede the path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The flavor of path being canonicalized.
///
/// Both styles share one canonicalization algorithm; the style only selects
/// the separator character and whether a `volume:` prefix is recognized.
///
/// # Examples
///
/// ```
/// use pathcanon::PathStyle;
///
/// assert_eq!(PathStyle::Posix.separator(), '/');
/// assert_eq!(PathStyle::Efi.separator(), '\\');
/// assert!(!PathStyle::Posix.supports_volume_prefix());
/// assert!(PathStyle::Efi.supports_volume_prefix());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// POSIX-style paths: `/` separators, no volume prefix.
    Posix,
    /// EFI-style paths: `\` separators, optional `volume:` prefix.
    Efi,
}

impl PathStyle {
    /// The separator character for this style.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Efi => '\\',
        }
    }

    /// Whether paths of this style may carry an opaque `volume:` prefix.
    ///
    /// The prefix runs up to and including the first `:` and is passed
    /// through canonicalization unmodified.
    #[must_use]
    pub const fn supports_volume_prefix(self) -> bool {
        matches!(self, Self::Efi)
    }

    /// Parses a path style from a string.
    ///
    /// Recognizes: "posix", "efi" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::PathStyle;
    ///
    /// assert_eq!(PathStyle::parse("posix").unwrap(), PathStyle::Posix);
    /// assert_eq!(PathStyle::parse("EFI").unwrap(), PathStyle::Efi);
    /// assert!(PathStyle::parse("dos").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "efi" => Ok(Self::Efi),
            _ => Err(format!("invalid path style: {s}")),
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::Posix
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Efi => write!(f, "efi"),
        }
    }
}
