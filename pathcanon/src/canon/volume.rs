//! Volume prefix handling for EFI-style paths.
//!
//! An EFI path may begin with an opaque volume name terminated by the first
//! `:`, as in `fs0:\efi\boot`. The prefix is not validated or tokenized; it
//! is split off before canonicalization and re-attached verbatim afterward.

/// Split an optional volume prefix off a path.
///
/// The prefix is everything up to and including the first `:` anywhere in
/// the input; the remainder is the path proper. Inputs without a `:` have
/// no prefix. The prefix contents are deliberately unconstrained, so even
/// an empty name (`:abc`) or one containing separators is accepted.
///
/// # Examples
///
/// ```
/// use pathcanon::split_volume_prefix;
///
/// assert_eq!(split_volume_prefix("fs0:\\abc"), (Some("fs0:"), "\\abc"));
/// assert_eq!(split_volume_prefix("c:"), (Some("c:"), ""));
/// assert_eq!(split_volume_prefix("\\abc"), (None, "\\abc"));
/// assert_eq!(split_volume_prefix(""), (None, ""));
/// ```
#[must_use]
pub fn split_volume_prefix(path: &str) -> (Option<&str>, &str) {
    match path.find(':') {
        Some(index) => {
            let split = index + 1;
            (Some(&path[..split]), &path[split..])
        }
        None => (None, path),
    }
}
