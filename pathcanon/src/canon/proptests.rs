//! Property-based tests for canonicalization.
//!
//! The unit tests in the canon modules pin down the literal scenarios;
//! this suite hammers the structural invariants with large random inputs,
//! including messy separator runs and volume prefixes.

use proptest::prelude::*;

use super::canonicalize::canonicalize;
use crate::style::PathStyle;

// Strategy for a single component: mostly plain names, some . and ..
fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

// Messy paths: components joined by separator runs of 1..=3, optional
// leading separator and trailing run.
fn messy_path_strategy(separator: char) -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec((component_strategy(), 1..=3usize), 1..=10),
        0..=2usize,
    )
        .prop_map(move |(absolute, pieces, trailing)| {
            let sep = separator.to_string();
            let mut path = String::new();
            if absolute {
                path.push(separator);
            }
            for (index, (component, run)) in pieces.iter().enumerate() {
                if index > 0 {
                    path.push_str(&sep.repeat(*run));
                }
                path.push_str(component);
            }
            path.push_str(&sep.repeat(trailing));
            path
        })
}

fn volume_prefix_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z][a-z0-9]{0,4}".prop_map(|name| format!("{name}:")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Canonicalization is idempotent: a canonical path is its own
    // canonical form
    #[test]
    fn posix_canonicalize_idempotent(path in messy_path_strategy('/')) {
        if let Ok(canonical) = canonicalize(&path, PathStyle::Posix) {
            if !canonical.is_empty() {
                let again = canonicalize(&canonical, PathStyle::Posix).unwrap();
                prop_assert_eq!(canonical, again);
            }
        }
    }

    // The canonical form never grows
    #[test]
    fn posix_canonical_never_longer(path in messy_path_strategy('/')) {
        if let Ok(canonical) = canonicalize(&path, PathStyle::Posix) {
            prop_assert!(canonical.len() <= path.len());
        }
    }

    // Canonical paths carry no . or .. components
    #[test]
    fn posix_no_dot_components(path in messy_path_strategy('/')) {
        if let Ok(canonical) = canonicalize(&path, PathStyle::Posix) {
            for part in canonical.split('/') {
                prop_assert_ne!(part, ".");
                prop_assert_ne!(part, "..");
            }
        }
    }

    // Canonical paths have no separator runs and no trailing separator
    #[test]
    fn posix_separators_collapsed(path in messy_path_strategy('/')) {
        if let Ok(canonical) = canonicalize(&path, PathStyle::Posix) {
            prop_assert!(!canonical.contains("//"));
            if canonical != "/" {
                prop_assert!(!canonical.ends_with('/'));
            }
        }
    }

    // Absolute and relative status survives canonicalization
    #[test]
    fn posix_absolute_status_preserved(path in messy_path_strategy('/')) {
        if let Ok(canonical) = canonicalize(&path, PathStyle::Posix) {
            if path.starts_with('/') {
                prop_assert!(canonical.starts_with('/'));
            } else if !canonical.is_empty() {
                prop_assert!(!canonical.starts_with('/'));
            }
        }
    }

    // A path that starts by ascending is always invalid
    #[test]
    fn posix_leading_parent_always_invalid(path in messy_path_strategy('/')) {
        let input = format!("../{path}");
        prop_assert!(canonicalize(&input, PathStyle::Posix).is_err());
    }

    // Failure reports the input path untouched
    #[test]
    fn posix_error_preserves_input(path in messy_path_strategy('/')) {
        if let Err(err) = canonicalize(&path, PathStyle::Posix) {
            prop_assert_eq!(err.path(), path.as_str());
        }
    }

    // EFI canonicalization is idempotent, prefix included
    #[test]
    fn efi_canonicalize_idempotent(
        prefix in volume_prefix_strategy(),
        path in messy_path_strategy('\\'),
    ) {
        let input = format!("{prefix}{path}");
        if let Ok(canonical) = canonicalize(&input, PathStyle::Efi) {
            let again = canonicalize(&canonical, PathStyle::Efi).unwrap();
            prop_assert_eq!(canonical, again);
        }
    }

    // The volume prefix is passed through verbatim
    #[test]
    fn efi_prefix_preserved(
        prefix in "[a-z][a-z0-9]{0,4}:",
        path in messy_path_strategy('\\'),
    ) {
        let input = format!("{prefix}{path}");
        if let Ok(canonical) = canonicalize(&input, PathStyle::Efi) {
            prop_assert!(canonical.starts_with(&prefix));
        }
    }

    // Both styles run the same algorithm: translating separators
    // translates the result (components carry no ':' so no accidental
    // volume prefix appears)
    #[test]
    fn efi_matches_posix_modulo_separator(path in messy_path_strategy('/')) {
        let efi_input = path.replace('/', "\\");
        let posix = canonicalize(&path, PathStyle::Posix);
        let efi = canonicalize(&efi_input, PathStyle::Efi);
        match (posix, efi) {
            (Ok(p), Ok(e)) => prop_assert_eq!(p.replace('/', "\\"), e),
            (Err(_), Err(_)) => {}
            (p, e) => prop_assert!(
                false,
                "styles disagree for {:?}: posix {:?}, efi {:?}",
                path, p, e
            ),
        }
    }
}
