//! Lexical path canonicalization.
//!
//! This module implements the canonicalization pipeline: split the path
//! into components, resolve `.` and `..` in a single left-to-right pass,
//! and rebuild the minimal path from the surviving components. The input
//! is borrowed and never modified; the result is a fresh string no longer
//! than the input.

use crate::canon::component::{component_table, split_components, Component, ComponentKind};
use crate::canon::volume::split_volume_prefix;
use crate::error::{Error, Result};
use crate::style::PathStyle;

/// Resolve `.` and `..` components, returning the survivors in order.
///
/// The pass walks the components once. `.` and zero-length components are
/// elided. `..` is elided and additionally cancels the nearest preceding
/// component that is still a survivor; if none exists the whole path is
/// invalid. Survivors keep their original relative order.
///
/// `path` is the full original input, used only for error reporting.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if a `..` has no surviving predecessor
/// to cancel.
///
/// # Examples
///
/// ```
/// use pathcanon::{resolve_components, split_components};
///
/// let components = split_components("a/./b/../c", '/');
/// let survivors = resolve_components(&components, "a/./b/../c").unwrap();
/// let texts: Vec<&str> = survivors.iter().map(|c| c.as_str()).collect();
/// assert_eq!(texts, vec!["a", "c"]);
///
/// let components = split_components("../a", '/');
/// assert!(resolve_components(&components, "../a").is_err());
/// ```
pub fn resolve_components<'a>(
    components: &[Component<'a>],
    path: &str,
) -> Result<Vec<Component<'a>>> {
    let mut survivors: Vec<Component<'a>> = Vec::with_capacity(components.len());

    for component in components {
        match component.kind() {
            // Contribute nothing; never a cancellation target.
            ComponentKind::Empty | ComponentKind::CurDir => {}
            ComponentKind::ParentDir => {
                if survivors.pop().is_none() {
                    return Err(Error::invalid_path(
                        path,
                        "'..' has no preceding component to cancel",
                    ));
                }
            }
            ComponentKind::Normal => survivors.push(*component),
        }
    }

    Ok(survivors)
}

/// Rebuild a path from surviving components.
///
/// Survivors are joined by exactly one separator, with a single leading
/// separator iff `absolute` is set and never a trailing one. With no
/// survivors the result collapses to the separator alone (absolute) or the
/// empty string (relative).
///
/// # Examples
///
/// ```
/// use pathcanon::{rebuild_path, Component};
///
/// let survivors = [Component::new("abc"), Component::new("123")];
/// assert_eq!(rebuild_path(&survivors, true, '/'), "/abc/123");
/// assert_eq!(rebuild_path(&survivors, false, '\\'), "abc\\123");
/// assert_eq!(rebuild_path(&[], true, '/'), "/");
/// assert_eq!(rebuild_path(&[], false, '/'), "");
/// ```
#[must_use]
pub fn rebuild_path(survivors: &[Component<'_>], absolute: bool, separator: char) -> String {
    if survivors.is_empty() {
        return if absolute {
            separator.to_string()
        } else {
            String::new()
        };
    }

    let mut out = String::new();
    if absolute {
        out.push(separator);
    }
    for (index, component) in survivors.iter().enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(component.as_str());
    }
    out
}

/// Canonicalize a path string according to the given style.
///
/// Resolves `.` and `..`, collapses separator runs, strips trailing
/// separators, and preserves absolute-path status. For the EFI style an
/// optional `volume:` prefix (through the first `:`) is passed through
/// unmodified, and a path that is empty after the prefix is returned
/// unchanged. The POSIX style rejects an empty input.
///
/// The input is never modified; the canonical form is a newly allocated
/// string whose post-prefix length never exceeds the input's.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if a `..` would ascend past the start of
/// the path, or (POSIX only) if the input is empty.
///
/// # Examples
///
/// ```
/// use pathcanon::{canonicalize, PathStyle};
///
/// let canonical = canonicalize("/abc/./x/../123", PathStyle::Posix).unwrap();
/// assert_eq!(canonical, "/abc/123");
///
/// let canonical = canonicalize("fs0:\\abc\\..", PathStyle::Efi).unwrap();
/// assert_eq!(canonical, "fs0:\\");
///
/// assert!(canonicalize("..", PathStyle::Posix).is_err());
/// ```
pub fn canonicalize(path: &str, style: PathStyle) -> Result<String> {
    canonicalize_traced(path, style, false)
}

/// Canonicalization pipeline with optional component-table tracing.
///
/// Tracing emits the split component table and the survivor set through
/// the `log` facade at debug level. It never affects the result.
pub(crate) fn canonicalize_traced(path: &str, style: PathStyle, trace: bool) -> Result<String> {
    let separator = style.separator();

    let (prefix, remainder) = if style.supports_volume_prefix() {
        split_volume_prefix(path)
    } else {
        (None, path)
    };

    if remainder.is_empty() {
        // EFI: nothing after the volume prefix, nothing to canonicalize.
        if style.supports_volume_prefix() {
            return Ok(path.to_string());
        }
        return Err(Error::invalid_path(path, "empty path"));
    }

    let absolute = remainder.starts_with(separator);
    let components = split_components(remainder, separator);
    if trace {
        log::debug!(
            "in: {remainder:?} ({} components)\n{}",
            components.len(),
            component_table(&components)
        );
    }

    let survivors = resolve_components(&components, path)?;
    if trace {
        log::debug!(
            "out: {} surviving component(s)\n{}",
            survivors.len(),
            component_table(&survivors)
        );
    }

    let rebuilt = rebuild_path(&survivors, absolute, separator);
    Ok(match prefix {
        Some(prefix) => format!("{prefix}{rebuilt}"),
        None => rebuilt,
    })
}
