//! Path component splitting.
//!
//! This module breaks a path string into its ordered components and
//! classifies each one for the resolution pass. Splitting is lossless:
//! joining the components with the separator reproduces the input, and the
//! component count is always one more than the separator count.

use std::fmt;

/// How a component participates in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// A plain name; survives resolution unless cancelled by a later `..`.
    Normal,
    /// `.`: elided, no other effect.
    CurDir,
    /// `..`: elided, and cancels the nearest surviving predecessor.
    ParentDir,
    /// A zero-length component from consecutive separators; contributes
    /// nothing and is never a cancellation target.
    Empty,
}

/// One component of a path: a maximal run of non-separator characters.
///
/// Components borrow from the input path; nothing is copied until the
/// canonical path is reconstructed.
///
/// # Examples
///
/// ```
/// use pathcanon::{split_components, ComponentKind};
///
/// let components = split_components("a/./b", '/');
/// assert_eq!(components.len(), 3);
/// assert_eq!(components[0].as_str(), "a");
/// assert_eq!(components[1].kind(), ComponentKind::CurDir);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component<'a> {
    text: &'a str,
}

impl<'a> Component<'a> {
    /// Wrap a single separator-free component.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The component text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// The component length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the component is zero-length.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Classify the component for resolution.
    ///
    /// Only the exact texts `.` and `..` are special; names such as `...`
    /// or `.foo` are plain components.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcanon::{Component, ComponentKind};
    ///
    /// assert_eq!(Component::new(".").kind(), ComponentKind::CurDir);
    /// assert_eq!(Component::new("..").kind(), ComponentKind::ParentDir);
    /// assert_eq!(Component::new("...").kind(), ComponentKind::Normal);
    /// assert_eq!(Component::new("").kind(), ComponentKind::Empty);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self.text {
            "" => ComponentKind::Empty,
            "." => ComponentKind::CurDir,
            ".." => ComponentKind::ParentDir,
            _ => ComponentKind::Normal,
        }
    }
}

impl fmt::Display for Component<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Split a path into its ordered components on the given separator.
///
/// Every separator starts a new component, so consecutive separators yield
/// zero-length components and the result always holds exactly one more
/// component than the input has separators. An empty input yields a single
/// empty component.
///
/// # Examples
///
/// ```
/// use pathcanon::split_components;
///
/// let components = split_components("abc//123", '/');
/// let texts: Vec<&str> = components.iter().map(|c| c.as_str()).collect();
/// assert_eq!(texts, vec!["abc", "", "123"]);
///
/// // Leading separator produces a leading empty component
/// let components = split_components("/abc", '/');
/// assert_eq!(components.len(), 2);
/// assert!(components[0].is_empty());
/// ```
#[must_use]
pub fn split_components(path: &str, separator: char) -> Vec<Component<'_>> {
    path.split(separator).map(Component::new).collect()
}

/// Render a component list as an indexed table, one line per component.
///
/// Used for diagnostics: each line shows the component's position, length,
/// and quoted text. Pure formatting; returns a fresh string.
///
/// # Examples
///
/// ```
/// use pathcanon::{component_table, split_components};
///
/// let table = component_table(&split_components("a/..", '/'));
/// assert!(table.contains("\"a\""));
/// assert!(table.contains("\"..\""));
/// ```
#[must_use]
pub fn component_table(components: &[Component<'_>]) -> String {
    let mut out = String::new();
    for (index, component) in components.iter().enumerate() {
        out.push_str(&format!(
            "[{index:>3}] len={:<3} {:?}\n",
            component.len(),
            component.as_str()
        ));
    }
    out
}
