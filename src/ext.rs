//! Method-call syntax for the string helpers
//!
//! ```
//! use strsafe::{CharSet, StrExt};
//!
//! assert_eq!("hello.txt".removing_suffix(".txt"), "hello");
//! assert_eq!("hello".safe_substring_to_index(99), "hello");
//! assert_eq!("a-b-c".removing_characters(&CharSet::from_chars(['-'])), "abc");
//! ```

use crate::charset::{self, CharSet};
use crate::reverse::{self, ReverseMode};
use crate::substring::{self, IndexUnit};
use crate::suffix;
use std::borrow::Cow;

/// Bounds-safe string operations as methods on `str`.
pub trait StrExt {
    fn safe_substring_to_index(&self, index: usize) -> &str;
    fn safe_substring_from_index(&self, index: usize) -> &str;
    fn safe_substring_to_index_in(&self, index: usize, unit: IndexUnit) -> &str;
    fn safe_substring_from_index_in(&self, index: usize, unit: IndexUnit) -> &str;
    fn length_in(&self, unit: IndexUnit) -> usize;
    fn reversed_string(&self) -> String;
    fn reversed_string_with(&self, mode: ReverseMode) -> String;
    fn removing_suffix(&self, suffix: &str) -> &str;
    fn removing_prefix(&self, prefix: &str) -> &str;
    fn removing_characters(&self, set: &CharSet) -> Cow<'_, str>;
}

impl StrExt for str {
    fn safe_substring_to_index(&self, index: usize) -> &str {
        substring::safe_substring_to_index(self, index)
    }

    fn safe_substring_from_index(&self, index: usize) -> &str {
        substring::safe_substring_from_index(self, index)
    }

    fn safe_substring_to_index_in(&self, index: usize, unit: IndexUnit) -> &str {
        substring::safe_substring_to_index_in(self, index, unit)
    }

    fn safe_substring_from_index_in(&self, index: usize, unit: IndexUnit) -> &str {
        substring::safe_substring_from_index_in(self, index, unit)
    }

    fn length_in(&self, unit: IndexUnit) -> usize {
        substring::length_in(self, unit)
    }

    fn reversed_string(&self) -> String {
        reverse::reversed_string(self)
    }

    fn reversed_string_with(&self, mode: ReverseMode) -> String {
        reverse::reversed_string_with(self, mode)
    }

    fn removing_suffix(&self, suffix: &str) -> &str {
        suffix::removing_suffix(self, suffix)
    }

    fn removing_prefix(&self, prefix: &str) -> &str {
        suffix::removing_prefix(self, prefix)
    }

    fn removing_characters(&self, set: &CharSet) -> Cow<'_, str> {
        charset::removing_characters(self, set)
    }
}
