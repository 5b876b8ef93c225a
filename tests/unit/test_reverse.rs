//! Unit tests for string reversal and affix removal

use strsafe::{removing_prefix, removing_suffix, reversed_string, reversed_string_with, ReverseMode};

mod reverse_tests {
    use super::*;

    #[test]
    fn test_default_mode_is_chars() {
        assert_eq!(ReverseMode::default(), ReverseMode::Chars);
        assert_eq!(
            reversed_string("ae\u{301}"),
            reversed_string_with("ae\u{301}", ReverseMode::Chars)
        );
    }

    #[test]
    fn test_reverse_mixed_scripts() {
        assert_eq!(reversed_string("ab日🙂"), "🙂日ba");
    }

    #[test]
    fn test_grapheme_reverse_keeps_skin_tone_modifier() {
        let wave = "👋\u{1F3FD}";
        let input = format!("hi{wave}");
        assert_eq!(
            reversed_string_with(&input, ReverseMode::Graphemes),
            format!("{wave}ih")
        );
    }

    #[test]
    fn test_leading_combining_mark_does_not_round_trip_by_grapheme() {
        let s = "\u{301}a";
        let once = reversed_string_with(s, ReverseMode::Graphemes);
        assert_eq!(once, "a\u{301}");
        assert_ne!(reversed_string_with(&once, ReverseMode::Graphemes), s);
        assert_eq!(reversed_string(&reversed_string(s)), s);
    }
}

mod affix_tests {
    use super::*;

    #[test]
    fn test_removing_suffix_examples() {
        assert_eq!(removing_suffix("hello.txt", ".txt"), "hello");
        assert_eq!(removing_suffix("hello.txt", ""), "hello.txt");
        assert_eq!(removing_suffix("hello.txt", "hello"), "hello.txt");
        assert_eq!(removing_suffix("", "x"), "");
    }

    #[test]
    fn test_removing_suffix_longer_than_string() {
        assert_eq!(removing_suffix("a", "aaaa"), "a");
    }

    #[test]
    fn test_removing_prefix_examples() {
        assert_eq!(removing_prefix("refs/heads/main", "refs/heads/"), "main");
        assert_eq!(removing_prefix("main", "refs/heads/"), "main");
    }
}
