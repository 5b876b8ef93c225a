//! Unit tests for character sets
//!
//! Tests cover:
//! - Named classes
//! - Pattern parsing (ranges, escapes, inversion)
//! - Stripping via free function and StrExt

use std::borrow::Cow;
use strsafe::{removing_characters, CharClass, CharSet, CharSetError, StrExt};

mod class_tests {
    use super::*;

    #[test]
    fn test_digits_include_non_ascii_numerals() {
        let set = CharSet::digits();
        assert!(set.contains('7'));
        assert!(set.contains('٣'));
        assert!(!set.contains('x'));
    }

    #[test]
    fn test_newline_class_members() {
        let set = CharSet::newlines();
        for c in ['\n', '\r', '\u{2028}', '\u{2029}', '\u{85}'] {
            assert!(set.contains(c), "{c:?}");
        }
        assert!(!set.contains(' '));
    }

    #[test]
    fn test_control_and_punctuation() {
        assert_eq!(removing_characters("a\u{7}b\u{1b}c", &CharSet::control()), "abc");
        assert_eq!(
            removing_characters("hello, world!", &CharSet::punctuation()),
            "hello world"
        );
    }

    #[test]
    fn test_digits_exclude_fractions_and_superscripts() {
        let set = CharSet::digits();
        for c in ['½', '²', 'Ⅻ'] {
            assert!(!set.contains(c), "{c:?}");
        }
        assert_eq!(removing_characters("v²=½·9", &set), "v²=½·");
    }

    #[test]
    fn test_punctuation_is_unicode_p_category() {
        let set = CharSet::punctuation();
        for c in ['¿', '«', '»', '—', '、'] {
            assert!(set.contains(c), "{c:?}");
        }
        for c in ['$', '+', '<', '^', '|'] {
            assert!(!set.contains(c), "{c:?}");
        }
    }

    #[test]
    fn test_class_display() {
        assert_eq!(CharClass::Alphanumerics.to_string(), "[:alnum:]");
    }
}

mod parse_tests {
    use super::*;

    #[test]
    fn test_from_str_matches_parse() {
        let a: CharSet = "a-f".parse().unwrap();
        assert_eq!(a, CharSet::parse("a-f").unwrap());
    }

    #[test]
    fn test_keep_only_alphanumerics() {
        let set = CharSet::parse("^[:alnum:]").unwrap();
        assert_eq!("Order #42-B!".removing_characters(&set), "Order42B");
    }

    #[test]
    fn test_lone_caret_strips_only_carets() {
        let set = CharSet::parse("^").unwrap();
        assert_eq!("a^b^c".removing_characters(&set), "abc");
        assert_eq!("plain".removing_characters(&set), "plain");
    }

    #[test]
    fn test_unicode_range() {
        let set = CharSet::parse(r"\u{3040}-\u{309F}").unwrap();
        assert_eq!(removing_characters("abcひらがなdef", &set), "abcdef");
    }

    #[test]
    fn test_errors_are_reported() {
        assert!(matches!(
            CharSet::parse("9-0"),
            Err(CharSetError::ReversedRange { start: '9', end: '0' })
        ));
        assert!(matches!(
            CharSet::parse("[:nope:]"),
            Err(CharSetError::UnknownClass { .. })
        ));
        assert!(matches!(
            CharSet::parse(r"\u{110000}"),
            Err(CharSetError::InvalidEscape { .. })
        ));
    }
}

mod stripping_tests {
    use super::*;

    #[test]
    fn test_dash_removal_example() {
        let set: CharSet = ['-'].into_iter().collect();
        assert_eq!(removing_characters("a-b-c", &set), "abc");
    }

    #[test]
    fn test_all_removed_yields_empty() {
        assert_eq!(removing_characters("---", &CharSet::from_chars(['-'])), "");
    }

    #[test]
    fn test_no_match_borrows_input() {
        let input = String::from("abc");
        let out = removing_characters(&input, &CharSet::from_chars(['z']));
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_union_builder() {
        let set = CharSet::whitespace().union(CharSet::from_chars(['.', ',']));
        assert_eq!(removing_characters("a, b. c", &set), "abc");
    }
}
