//! Clamped substring extraction
//!
//! Slicing a `&str` at an arbitrary index panics when the index is past the
//! end or falls inside a multi-byte character. The helpers here clamp the
//! index to the string length and floor it to the previous character
//! boundary, so every result is a valid slice of the input.
//!
//! Indices are counted in an [`IndexUnit`]: Unicode scalar values by default,
//! or UTF-16 code units / UTF-8 bytes when the index comes from elsewhere.

use serde::{Deserialize, Serialize};
use std::iter;
use tracing::trace;

/// What an index counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IndexUnit {
    /// Unicode scalar values (`char`)
    #[default]
    Chars,
    /// UTF-16 code units; an index inside a surrogate pair is floored
    Utf16,
    /// UTF-8 bytes; an index inside a multi-byte sequence is floored
    Bytes,
}

impl std::fmt::Display for IndexUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexUnit::Chars => write!(f, "chars"),
            IndexUnit::Utf16 => write!(f, "utf16"),
            IndexUnit::Bytes => write!(f, "bytes"),
        }
    }
}

/// Length of `s` measured in `unit`.
pub fn length_in(s: &str, unit: IndexUnit) -> usize {
    match unit {
        IndexUnit::Chars => s.chars().count(),
        IndexUnit::Utf16 => s.encode_utf16().count(),
        IndexUnit::Bytes => s.len(),
    }
}

/// Byte offset at which `s` is split for `index`.
///
/// The result is always a char boundary of `s` and never exceeds `s.len()`.
/// An index past the end clamps to `s.len()`.
pub fn clamp_to_boundary(s: &str, index: usize, unit: IndexUnit) -> usize {
    match boundary_within(s, index, unit) {
        Some(offset) => offset,
        None => {
            trace!(index, %unit, len = s.len(), "index past end of string, clamping");
            s.len()
        }
    }
}

/// `None` when `index` lies past the end of `s`.
fn boundary_within(s: &str, index: usize, unit: IndexUnit) -> Option<usize> {
    match unit {
        IndexUnit::Chars => s
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(iter::once(s.len()))
            .nth(index),
        IndexUnit::Utf16 => {
            let mut units = 0;
            for (offset, c) in s.char_indices() {
                if units + c.len_utf16() > index {
                    return Some(offset);
                }
                units += c.len_utf16();
            }
            (units == index).then_some(s.len())
        }
        IndexUnit::Bytes => (index <= s.len()).then(|| floor_char_boundary(s, index)),
    }
}

/// Largest char boundary of `s` at or before `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Prefix of `s` holding `min(index, length)` characters.
pub fn safe_substring_to_index(s: &str, index: usize) -> &str {
    safe_substring_to_index_in(s, index, IndexUnit::Chars)
}

/// Suffix of `s` starting at character `min(index, length)`.
pub fn safe_substring_from_index(s: &str, index: usize) -> &str {
    safe_substring_from_index_in(s, index, IndexUnit::Chars)
}

/// Prefix of `s` up to `index`, counted in `unit`.
pub fn safe_substring_to_index_in(s: &str, index: usize, unit: IndexUnit) -> &str {
    &s[..clamp_to_boundary(s, index, unit)]
}

/// Suffix of `s` from `index`, counted in `unit`.
pub fn safe_substring_from_index_in(s: &str, index: usize, unit: IndexUnit) -> &str {
    &s[clamp_to_boundary(s, index, unit)..]
}
