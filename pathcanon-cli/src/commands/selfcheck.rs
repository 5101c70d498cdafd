//! Selfcheck command implementation.
//!
//! This module implements the `selfcheck` command, which runs the
//! built-in acceptance tables for both styles and reports any case
//! where the library deviates from the expected canonical form.

use crate::error::CliError;
use crate::utils::{GlobalOptions, StyleArg};
use clap::Args;
use pathcanon::{canonicalize, PathStyle};

/// POSIX acceptance cases: `(input, expected canonical or None)`.
const POSIX_CASES: &[(&str, Option<&str>)] = &[
    ("/", Some("/")),
    ("//", Some("/")),
    ("///", Some("/")),
    ("/abc", Some("/abc")),
    ("//abc", Some("/abc")),
    ("///abc", Some("/abc")),
    ("abc", Some("abc")),
    ("abc/", Some("abc")),
    ("abc//", Some("abc")),
    ("abc/123", Some("abc/123")),
    ("abc//123", Some("abc/123")),
    ("abc///123", Some("abc/123")),
    ("abc/./123", Some("abc/123")),
    ("abc/x/../123", Some("abc/123")),
    ("..", None),
    ("/..", None),
    ("../123", None),
    ("/../123", None),
    ("//../123", None),
    ("./../123", None),
    ("./", Some("")),
    (".//", Some("")),
    (".///", Some("")),
    ("./abc", Some("abc")),
    ("././abc", Some("abc")),
    ("./../abc", None),
    ("abc/.", Some("abc")),
    ("abc/./.", Some("abc")),
    ("/abc/.", Some("/abc")),
    ("/abc/./.", Some("/abc")),
    ("/./abc/.", Some("/abc")),
    ("/abc/././123", Some("/abc/123")),
    ("abc/../123", Some("123")),
    ("/abc/../123", Some("/123")),
    ("abc/./../123", Some("123")),
    ("/abc/./../123", Some("/123")),
    ("abc/def/../123", Some("abc/123")),
    ("/abc/def/../123", Some("/abc/123")),
    ("abc/def/../../123", Some("123")),
    ("/abc/def/../../123", Some("/123")),
    ("/abc/..", Some("/")),
    ("abc/..", Some("")),
    ("abc/123/..", Some("abc")),
    ("/abc/123/..", Some("/abc")),
    ("abc/123/../..", Some("")),
    ("/abc/123/../..", Some("/")),
    ("abc/123/../../.", Some("")),
    ("/abc/123/../../.", Some("/")),
    ("abc/123/.././..", Some("")),
    ("/abc/123/.././..", Some("/")),
    ("abc////..////z////", Some("z")),
    ("/////abc////..////z////", Some("/z")),
    (
        "d/./e/.././o/f/g/./h/../../.././n/././e/./i/..",
        Some("d/o/n/e"),
    ),
];

/// EFI acceptance cases: `(input, expected canonical or None)`.
const EFI_CASES: &[(&str, Option<&str>)] = &[
    ("", Some("")),
    ("\\", Some("\\")),
    ("\\\\", Some("\\")),
    ("\\\\\\", Some("\\")),
    ("c:\\", Some("c:\\")),
    ("fs0:\\", Some("fs0:\\")),
    ("\\abc", Some("\\abc")),
    ("\\\\abc", Some("\\abc")),
    ("\\\\\\abc", Some("\\abc")),
    ("abc", Some("abc")),
    ("abc\\", Some("abc")),
    ("abc\\\\", Some("abc")),
    ("abc\\123", Some("abc\\123")),
    ("abc\\\\123", Some("abc\\123")),
    ("abc\\\\\\123", Some("abc\\123")),
    ("abc\\.\\123", Some("abc\\123")),
    ("abc\\x\\..\\123", Some("abc\\123")),
    ("c:abc", Some("c:abc")),
    ("fs0:abc", Some("fs0:abc")),
    ("..", None),
    ("\\..", None),
    ("..\\123", None),
    ("c:..\\123", None),
    ("fs0:..\\123", None),
    ("\\..\\123", None),
    ("\\\\..\\123", None),
    (".\\..\\123", None),
    (".\\", Some("")),
    (".\\\\", Some("")),
    (".\\\\\\", Some("")),
    (".\\abc", Some("abc")),
    (".\\.\\abc", Some("abc")),
    (".\\..\\abc", None),
    ("c:.\\abc", Some("c:abc")),
    ("fs0:.\\abc", Some("fs0:abc")),
    ("abc\\.", Some("abc")),
    ("abc\\.\\.", Some("abc")),
    ("\\abc\\.", Some("\\abc")),
    ("\\abc\\.\\.", Some("\\abc")),
    ("\\.\\abc\\.", Some("\\abc")),
    ("\\abc\\.\\.\\123", Some("\\abc\\123")),
    ("abc\\..\\123", Some("123")),
    ("\\abc\\..\\123", Some("\\123")),
    ("abc\\.\\..\\123", Some("123")),
    ("\\abc\\.\\..\\123", Some("\\123")),
    ("abc\\def\\..\\123", Some("abc\\123")),
    ("\\abc\\def\\..\\123", Some("\\abc\\123")),
    ("abc\\def\\..\\..\\123", Some("123")),
    ("\\abc\\def\\..\\..\\123", Some("\\123")),
    ("\\abc\\..", Some("\\")),
    ("abc\\..", Some("")),
    ("abc\\123\\..", Some("abc")),
    ("\\abc\\123\\..", Some("\\abc")),
    ("abc\\123\\..\\..", Some("")),
    ("\\abc\\123\\..\\..", Some("\\")),
    ("abc\\123\\..\\..\\.", Some("")),
    ("\\abc\\123\\..\\..\\.", Some("\\")),
    ("abc\\123\\..\\.\\..", Some("")),
    ("\\abc\\123\\..\\.\\..", Some("\\")),
    ("abc\\\\\\\\..\\\\\\\\z\\\\\\\\", Some("z")),
    ("\\\\\\\\\\abc\\\\\\\\..\\\\\\\\z\\\\\\\\", Some("\\z")),
    (
        "d\\.\\e\\..\\.\\o\\f\\g\\.\\h\\..\\..\\..\\.\\n\\.\\.\\e\\.\\i\\..",
        Some("d\\o\\n\\e"),
    ),
];

/// Run the built-in acceptance checks.
#[derive(Args)]
pub struct SelfcheckCommand {
    /// Check only one path style
    #[arg(long, value_enum, ignore_case = true)]
    pub style: Option<StyleArg>,
}

impl SelfcheckCommand {
    /// Execute the selfcheck command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let only = self.style.map(PathStyle::from);
        let mut failures = Vec::new();
        let mut total = 0;

        for (style, cases) in [(PathStyle::Posix, POSIX_CASES), (PathStyle::Efi, EFI_CASES)] {
            if only.is_some_and(|s| s != style) {
                continue;
            }
            for (input, expected) in cases {
                total += 1;
                let outcome = canonicalize(input, style);
                let pass = match (expected, &outcome) {
                    (Some(expected), Ok(canonical)) => canonical == expected,
                    (None, Err(_)) => true,
                    _ => false,
                };

                if pass {
                    if global.verbose {
                        println!("ok   {style} {input:?}");
                    }
                } else {
                    failures.push(describe_failure(style, input, *expected, &outcome));
                }
            }
        }

        if failures.is_empty() {
            if !global.quiet {
                println!("all {total} checks passed");
            }
            return Ok(());
        }

        if !global.quiet {
            for failure in &failures {
                println!("FAIL {failure}");
            }
        }

        Err(CliError::SemanticFailure(format!(
            "{} of {total} checks failed",
            failures.len()
        )))
    }
}

/// Describe one failed check for the report.
fn describe_failure(
    style: PathStyle,
    input: &str,
    expected: Option<&str>,
    outcome: &pathcanon::Result<String>,
) -> String {
    let expected = match expected {
        Some(canonical) => format!("{canonical:?}"),
        None => "rejection".to_string(),
    };
    let got = match outcome {
        Ok(canonical) => format!("{canonical:?}"),
        Err(e) => format!("error ({e})"),
    };

    format!("{style} {input:?}: expected {expected}, got {got}")
}
