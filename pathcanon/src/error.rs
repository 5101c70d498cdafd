//! Error types for the pathcanon library.
//!
//! This module provides the error type for canonicalization failures,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathcanon error.
///
/// # Examples
///
/// ```
/// use pathcanon::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/abc"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the pathcanon library.
///
/// Canonicalization has a single failure condition: the path is invalid.
/// A path is invalid when a `..` component has no preceding component left
/// to cancel (the path would escape its root), or when a separator-only
/// style receives an empty input. There is no partial result; an invalid
/// path is rejected as a whole.
#[derive(Debug, Error)]
pub enum Error {
    /// The path cannot be canonicalized.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The path as it was given, unmodified.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl Error {
    /// Construct an `InvalidPath` error for the given path.
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error is an invalid-path error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::Error;
    ///
    /// let err = Error::InvalidPath {
    ///     path: String::from(".."),
    ///     reason: String::from("escapes root"),
    /// };
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// The offending path, as it was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::Error;
    ///
    /// let err = Error::InvalidPath {
    ///     path: String::from("../123"),
    ///     reason: String::from("escapes root"),
    /// };
    /// assert_eq!(err.path(), "../123");
    /// ```
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidPath { path, .. } => path,
        }
    }
}
