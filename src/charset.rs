//! Character sets and character-set stripping
//!
//! A [`CharSet`] is an immutable membership filter over Unicode scalar values.
//! Sets are built from explicit characters, inclusive ranges, and named
//! [`CharClass`]es, and can be inverted or combined with [`CharSet::union`].
//!
//! [`CharSet::parse`] accepts a compact pattern syntax:
//!
//! | Pattern      | Meaning                               |
//! |--------------|---------------------------------------|
//! | `abc`        | the literal characters                |
//! | `a-z`        | inclusive range                       |
//! | `[:digit:]`  | a named class                         |
//! | `\-` `\\`    | escaped literal                       |
//! | `\n` `\t` `\r` `\0` | control characters             |
//! | `\u{1F600}`  | a scalar value by hex code point      |
//! | `^...`       | leading caret inverts the whole set   |
//!
//! A `-` that is first or last in the pattern is taken literally, and so is a
//! `^` that makes up the whole pattern.

use crate::errors::CharSetError;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::str::FromStr;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Named character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Horizontal whitespace: `char::is_whitespace` minus line terminators
    Whitespace,
    /// Line terminators: LF, VT, FF, CR, NEL, LS, PS
    Newlines,
    /// Any `char::is_whitespace` character, line terminators included
    WhitespaceAndNewlines,
    /// Decimal digits, general category Nd (excludes `½`, `²`, `Ⅻ`)
    Digits,
    /// `char::is_alphabetic`
    Letters,
    /// `char::is_alphanumeric`
    Alphanumerics,
    /// General category group P: connector, dash, open/close, quotes, other
    Punctuation,
    /// `char::is_control`
    Control,
    /// `char::is_uppercase`
    Uppercase,
    /// `char::is_lowercase`
    Lowercase,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Whitespace => c.is_whitespace() && !is_newline(c),
            CharClass::Newlines => is_newline(c),
            CharClass::WhitespaceAndNewlines => c.is_whitespace(),
            CharClass::Digits => c.general_category() == GeneralCategory::DecimalNumber,
            CharClass::Letters => c.is_alphabetic(),
            CharClass::Alphanumerics => c.is_alphanumeric(),
            CharClass::Punctuation => {
                c.general_category_group() == GeneralCategoryGroup::Punctuation
            }
            CharClass::Control => c.is_control(),
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Lowercase => c.is_lowercase(),
        }
    }

    /// Name used inside `[:name:]` patterns.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Whitespace => "blank",
            CharClass::Newlines => "newline",
            CharClass::WhitespaceAndNewlines => "space",
            CharClass::Digits => "digit",
            CharClass::Letters => "alpha",
            CharClass::Alphanumerics => "alnum",
            CharClass::Punctuation => "punct",
            CharClass::Control => "cntrl",
            CharClass::Uppercase => "upper",
            CharClass::Lowercase => "lower",
        }
    }
}

impl FromStr for CharClass {
    type Err = CharSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blank" | "whitespace" => Ok(CharClass::Whitespace),
            "newline" => Ok(CharClass::Newlines),
            "space" => Ok(CharClass::WhitespaceAndNewlines),
            "digit" => Ok(CharClass::Digits),
            "alpha" => Ok(CharClass::Letters),
            "alnum" => Ok(CharClass::Alphanumerics),
            "punct" => Ok(CharClass::Punctuation),
            "cntrl" => Ok(CharClass::Control),
            "upper" => Ok(CharClass::Uppercase),
            "lower" => Ok(CharClass::Lowercase),
            _ => Err(CharSetError::UnknownClass {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[:{}:]", self.name())
    }
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// An immutable set of Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharSet {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
    Members(Members),
    Inverted(Box<CharSet>),
    Union(Vec<CharSet>),
}

impl Default for Repr {
    fn default() -> Self {
        Repr::Members(Members::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Members {
    chars: BTreeSet<char>,
    ranges: Vec<RangeInclusive<char>>,
    classes: Vec<CharClass>,
}

impl Members {
    fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
            || self.ranges.iter().any(|r| r.contains(&c))
            || self.classes.iter().any(|class| class.contains(c))
    }

    fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.ranges.is_empty() && self.classes.is_empty()
    }

    fn merge(&mut self, other: Members) {
        self.chars.extend(other.chars);
        self.ranges.extend(other.ranges);
        for class in other.classes {
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
    }
}

impl CharSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set of every `char` in `chars`.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self::members(Members {
            chars: chars.into_iter().collect(),
            ..Members::default()
        })
    }

    /// Inclusive range `start..=end`. A reversed range is empty.
    pub fn range(start: char, end: char) -> Self {
        Self::members(Members {
            ranges: vec![start..=end],
            ..Members::default()
        })
    }

    pub fn class(class: CharClass) -> Self {
        Self::members(Members {
            classes: vec![class],
            ..Members::default()
        })
    }

    pub fn whitespace() -> Self {
        Self::class(CharClass::Whitespace)
    }

    pub fn newlines() -> Self {
        Self::class(CharClass::Newlines)
    }

    pub fn whitespace_and_newlines() -> Self {
        Self::class(CharClass::WhitespaceAndNewlines)
    }

    pub fn digits() -> Self {
        Self::class(CharClass::Digits)
    }

    pub fn letters() -> Self {
        Self::class(CharClass::Letters)
    }

    pub fn alphanumerics() -> Self {
        Self::class(CharClass::Alphanumerics)
    }

    pub fn punctuation() -> Self {
        Self::class(CharClass::Punctuation)
    }

    pub fn control() -> Self {
        Self::class(CharClass::Control)
    }

    fn members(members: Members) -> Self {
        Self {
            repr: Repr::Members(members),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match &self.repr {
            Repr::Members(members) => members.contains(c),
            Repr::Inverted(inner) => !inner.contains(c),
            Repr::Union(parts) => parts.iter().any(|part| part.contains(c)),
        }
    }

    /// True when no character can be a member.
    ///
    /// Only structurally empty sets report `true`; an inverted "everything"
    /// set is not detected.
    pub fn is_empty(&self) -> bool {
        match &self.repr {
            Repr::Members(members) => members.is_empty(),
            Repr::Inverted(_) => false,
            Repr::Union(parts) => parts.iter().all(CharSet::is_empty),
        }
    }

    /// The complement of this set.
    pub fn inverted(self) -> Self {
        match self.repr {
            Repr::Inverted(inner) => *inner,
            repr => Self {
                repr: Repr::Inverted(Box::new(Self { repr })),
            },
        }
    }

    /// Every character in either set.
    pub fn union(self, other: CharSet) -> Self {
        match (self.repr, other.repr) {
            (Repr::Members(mut a), Repr::Members(b)) => {
                a.merge(b);
                Self::members(a)
            }
            (Repr::Union(mut parts), Repr::Union(more)) => {
                parts.extend(more);
                Self {
                    repr: Repr::Union(parts),
                }
            }
            (Repr::Union(mut parts), repr) | (repr, Repr::Union(mut parts)) => {
                parts.push(Self { repr });
                Self {
                    repr: Repr::Union(parts),
                }
            }
            (a, b) => Self {
                repr: Repr::Union(vec![Self { repr: a }, Self { repr: b }]),
            },
        }
    }

    pub fn with_char(self, c: char) -> Self {
        self.union(Self::from_chars([c]))
    }

    pub fn with_range(self, start: char, end: char) -> Self {
        self.union(Self::range(start, end))
    }

    pub fn with_class(self, class: CharClass) -> Self {
        self.union(Self::class(class))
    }

    /// Build a set from the pattern syntax described in the module docs.
    pub fn parse(pattern: &str) -> Result<Self, CharSetError> {
        let chars: Vec<char> = pattern.chars().collect();
        let (inverted, start) = match chars.first() {
            Some('^') if chars.len() > 1 => (true, 1),
            _ => (false, 0),
        };

        let mut members = Members::default();
        let mut pos = start;
        while pos < chars.len() {
            let (atom, next) = parse_atom(&chars, pos)?;
            pos = next;
            let lo = match atom {
                Atom::Class(class) => {
                    if !members.classes.contains(&class) {
                        members.classes.push(class);
                    }
                    continue;
                }
                Atom::Char(c) => c,
            };

            // `-` only forms a range when something follows it
            if chars.get(pos) == Some(&'-') && pos + 1 < chars.len() {
                let (end_atom, after) = parse_atom(&chars, pos + 1)?;
                let hi = match end_atom {
                    Atom::Char(c) => c,
                    Atom::Class(_) => return Err(CharSetError::ClassInRange { position: pos + 1 }),
                };
                if lo > hi {
                    return Err(CharSetError::ReversedRange { start: lo, end: hi });
                }
                members.ranges.push(lo..=hi);
                pos = after;
            } else {
                members.chars.insert(lo);
            }
        }

        let set = Self::members(members);
        Ok(if inverted { set.inverted() } else { set })
    }
}

impl FromStr for CharSet {
    type Err = CharSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharSet::parse(s)
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharSet::from_chars(iter)
    }
}

impl From<CharClass> for CharSet {
    fn from(class: CharClass) -> Self {
        CharSet::class(class)
    }
}

enum Atom {
    Char(char),
    Class(CharClass),
}

/// Parse one literal, escape, or `[:class:]` at `pos`; returns the atom and the
/// position after it.
fn parse_atom(chars: &[char], pos: usize) -> Result<(Atom, usize), CharSetError> {
    match chars[pos] {
        '\\' => parse_escape(chars, pos),
        '[' if chars.get(pos + 1) == Some(&':') => {
            let body_start = pos + 2;
            let close = (body_start..chars.len().saturating_sub(1))
                .find(|&i| chars[i] == ':' && chars[i + 1] == ']')
                .ok_or(CharSetError::UnterminatedClass { position: pos })?;
            let name: String = chars[body_start..close].iter().collect();
            Ok((Atom::Class(name.parse()?), close + 2))
        }
        c => Ok((Atom::Char(c), pos + 1)),
    }
}

fn parse_escape(chars: &[char], pos: usize) -> Result<(Atom, usize), CharSetError> {
    let Some(&escaped) = chars.get(pos + 1) else {
        return Err(CharSetError::DanglingEscape);
    };
    let simple = match escaped {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' | '-' | '^' | '[' | ']' | ':' => Some(escaped),
        _ => None,
    };
    if let Some(c) = simple {
        return Ok((Atom::Char(c), pos + 2));
    }

    if escaped == 'u' && chars.get(pos + 2) == Some(&'{') {
        if let Some(close) = chars[pos + 3..].iter().position(|&c| c == '}') {
            let close = pos + 3 + close;
            let hex: String = chars[pos + 3..close].iter().collect();
            let scalar = u32::from_str_radix(&hex, 16)
                .ok()
                .filter(|_| (1..=6).contains(&hex.len()))
                .and_then(char::from_u32);
            if let Some(c) = scalar {
                return Ok((Atom::Char(c), close + 1));
            }
            return Err(CharSetError::InvalidEscape {
                sequence: chars[pos..=close].iter().collect(),
            });
        }
    }

    Err(CharSetError::InvalidEscape {
        sequence: chars[pos..=pos + 1].iter().collect(),
    })
}

/// `s` with every character in `set` removed, remaining order preserved.
///
/// Borrows `s` when nothing needs removing.
pub fn removing_characters<'a>(s: &'a str, set: &CharSet) -> Cow<'a, str> {
    if set.is_empty() || !s.chars().any(|c| set.contains(c)) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|&c| !set.contains(c)).collect())
}
