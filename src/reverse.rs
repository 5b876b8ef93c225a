//! String reversal by scalar value or by grapheme cluster

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Unit that reversal keeps intact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReverseMode {
    /// Reverse Unicode scalar values; always an involution
    #[default]
    Chars,
    /// Reverse extended grapheme clusters; keeps combining marks and emoji
    /// sequences attached to their base character
    Graphemes,
}

impl std::fmt::Display for ReverseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReverseMode::Chars => write!(f, "chars"),
            ReverseMode::Graphemes => write!(f, "graphemes"),
        }
    }
}

/// Reverse `s` by `char`.
///
/// Reversing twice always yields the original string.
pub fn reversed_string(s: &str) -> String {
    reversed_string_with(s, ReverseMode::Chars)
}

/// Reverse `s` using the given [`ReverseMode`].
///
/// In `Graphemes` mode a combining mark at the very start of `s` forms its own
/// cluster, and after one reversal it attaches to the preceding base. Such
/// input does not round-trip; well-formed text does.
pub fn reversed_string_with(s: &str, mode: ReverseMode) -> String {
    match mode {
        ReverseMode::Chars => s.chars().rev().collect(),
        ReverseMode::Graphemes => s.graphemes(true).rev().collect(),
    }
}
