//! Common fixtures for the canonicalization test suites.
//!
//! The two reference tables below are the acceptance fixtures for the
//! POSIX and EFI styles: every `(input, expected)` pair the library must
//! reproduce, with `None` marking inputs that must be rejected.

/// POSIX reference cases: `(input, expected canonical or None)`.
#[allow(dead_code)]
pub const POSIX_CASES: &[(&str, Option<&str>)] = &[
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

/// EFI reference cases: `(input, expected canonical or None)`.
#[allow(dead_code)]
pub const EFI_CASES: &[(&str, Option<&str>)] = &[
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
