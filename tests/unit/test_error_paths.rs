//! Error path and edge case tests
//!
//! The string operations are total; these tests make sure hostile input never
//! panics and that the fallible edges report typed errors.

use strsafe::errors::{get_exit_code, EXIT_CHARSET_ERROR, EXIT_ERROR};
use strsafe::{
    removing_characters, removing_suffix, reversed_string_with, safe_substring_from_index_in,
    safe_substring_to_index_in, CharSet, CharSetError, IndexUnit, ReverseMode, StrsafeError,
};

const HOSTILE: [&str; 6] = [
    "",
    "\0",
    "\u{FEFF}bom",
    "e\u{301}\u{302}\u{303}",
    "\u{1F1E6}\u{1F1E7}\u{1F1E8}",
    "\r\n\r",
];

#[test]
fn test_hostile_strings_never_panic() {
    for s in HOSTILE {
        for unit in [IndexUnit::Chars, IndexUnit::Utf16, IndexUnit::Bytes] {
            for index in [0, 1, 2, 3, 5, usize::MAX] {
                let _ = safe_substring_to_index_in(s, index, unit);
                let _ = safe_substring_from_index_in(s, index, unit);
            }
        }
        let _ = reversed_string_with(s, ReverseMode::Graphemes);
        let _ = removing_suffix(s, "\n\r");
        let _ = removing_characters(s, &CharSet::control().inverted());
    }
}

#[test]
fn test_malformed_patterns_error_instead_of_panicking() {
    for pattern in ["\\", "[:", "[:x", "a-[:digit:]", r"\u{", r"\u{}", r"\u{zz}", "~-!"] {
        let result = CharSet::parse(pattern);
        assert!(result.is_err(), "pattern {pattern:?} should be rejected");
    }
}

#[test]
fn test_charset_error_wraps_into_strsafe_error() {
    let err: StrsafeError = CharSetError::DanglingEscape.into();
    assert_eq!(
        err.to_string(),
        "Invalid character set: Pattern ends with a dangling backslash"
    );
    assert_eq!(get_exit_code(&err.into()), EXIT_CHARSET_ERROR);
}

#[test]
fn test_unrelated_error_maps_to_generic_exit_code() {
    let err = anyhow::anyhow!("boom");
    assert_eq!(get_exit_code(&err), EXIT_ERROR);
}
