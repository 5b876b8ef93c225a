//! strsafe - defensive string helpers
//!
//! Small, total string operations that never panic on input of unknown
//! length:
//!
//! - **Substrings**: prefix/suffix at an index, clamped to the string and
//!   floored to a character boundary ([`IndexUnit`] picks chars, UTF-16 units
//!   or bytes)
//! - **Reversal**: by `char` or by grapheme cluster
//! - **Affixes**: remove a suffix or prefix when present
//! - **Character sets**: delete every member of a [`CharSet`]
//!
//! Every operation is available as a free function and as a [`StrExt`]
//! method on `str`.
//!
//! # Quick Start
//!
//! ```
//! use strsafe::{CharSet, StrExt};
//!
//! assert_eq!("hello.txt".removing_suffix(".txt"), "hello");
//! assert_eq!("hello".safe_substring_to_index(10), "hello");
//! assert_eq!("hello".safe_substring_from_index(10), "");
//! assert_eq!("abc".reversed_string(), "cba");
//!
//! let dashes = CharSet::parse("-").unwrap();
//! assert_eq!("a-b-c".removing_characters(&dashes), "abc");
//! ```

// ─── String operations ─────────────────────────────────────────────
pub mod charset;
pub mod ext;
pub mod reverse;
pub mod substring;
pub mod suffix;

// ─── Infrastructure ────────────────────────────────────────────────
pub mod cli;
pub mod config;
pub mod errors;
pub mod telemetry;

pub use charset::{removing_characters, CharClass, CharSet};
pub use errors::{CharSetError, StrsafeError};
pub use ext::StrExt;
pub use reverse::{reversed_string, reversed_string_with, ReverseMode};
pub use substring::{
    clamp_to_boundary, length_in, safe_substring_from_index, safe_substring_from_index_in,
    safe_substring_to_index, safe_substring_to_index_in, IndexUnit,
};
pub use suffix::{removing_prefix, removing_suffix};
