//! Terminal constructors: literals, single characters and character sets.
//!
//! Terminal text is validated here, through the scanner, when the grammar
//! is built. A terminal that makes it into a `Grammar` is well formed.

use std::fmt;
use std::ops::RangeInclusive;

use descent_text::{encode, single_character, to_unicode};

use super::{Grammar, Kind};
use crate::graph::TerminalMode;
use crate::GrammarError;

/// One entry of a character set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharSpec {
    /// Every code point of the string is a member.
    Chars(String),
    /// An inclusive range; each endpoint must be exactly one character.
    Range(String, String),
}

impl CharSpec {
    fn to_ranges(&self) -> Result<Vec<RangeInclusive<char>>, GrammarError> {
        match self {
            CharSpec::Chars(chars) => {
                let points = to_unicode(&encode(chars)).map_err(|source| {
                    GrammarError::InvalidTerminal {
                        value: chars.clone(),
                        source,
                    }
                })?;
                Ok(points.into_iter().map(|point| point..=point).collect())
            }
            CharSpec::Range(lo, hi) => Ok(vec![one_character(lo)?..=one_character(hi)?]),
        }
    }
}

impl fmt::Display for CharSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharSpec::Chars(chars) => write!(f, "{chars:?}"),
            CharSpec::Range(lo, hi) => write!(f, "'{lo}'-'{hi}'"),
        }
    }
}

impl From<&str> for CharSpec {
    fn from(chars: &str) -> Self {
        CharSpec::Chars(chars.to_owned())
    }
}

impl From<String> for CharSpec {
    fn from(chars: String) -> Self {
        CharSpec::Chars(chars)
    }
}

impl From<char> for CharSpec {
    fn from(point: char) -> Self {
        CharSpec::Chars(point.to_string())
    }
}

impl From<(&str, &str)> for CharSpec {
    fn from((lo, hi): (&str, &str)) -> Self {
        CharSpec::Range(lo.to_owned(), hi.to_owned())
    }
}

impl From<RangeInclusive<char>> for CharSpec {
    fn from(range: RangeInclusive<char>) -> Self {
        CharSpec::Range(range.start().to_string(), range.end().to_string())
    }
}

fn one_character(value: &str) -> Result<char, GrammarError> {
    single_character(value).map_err(|source| GrammarError::InvalidTerminal {
        value: value.to_owned(),
        source,
    })
}

/// Match `value` exactly.
///
/// The default id is `value` itself. A one-character literal is built as
/// [`char`].
pub fn lit(value: &str) -> Result<Grammar, GrammarError> {
    let points = to_unicode(&encode(value)).map_err(|source| GrammarError::InvalidTerminal {
        value: value.to_owned(),
        source,
    })?;
    match points.as_slice() {
        [] => Err(GrammarError::EmptyLiteral),
        [point] => Ok(Grammar::from_kind(
            value,
            Kind::Char {
                value: value.to_owned(),
                point: *point,
            },
        )),
        _ => Ok(Grammar::from_kind(
            value,
            Kind::Literal {
                value: value.to_owned(),
                points,
            },
        )),
    }
}

/// Match exactly one character.
///
/// `value` must be a single code point. The default id is `value`.
pub fn char(value: &str) -> Result<Grammar, GrammarError> {
    let point = one_character(value)?;
    Ok(Grammar::from_kind(
        value,
        Kind::Char {
            value: value.to_owned(),
            point,
        },
    ))
}

/// Match any one character except `value`.
///
/// The default id is `value` prefixed with `!`.
pub fn not_char(value: &str) -> Result<Grammar, GrammarError> {
    let point = one_character(value)?;
    Ok(Grammar::from_kind(format!("!{value}"), Kind::NotChar { point }))
}

/// Match one character in the set.
pub fn char_set(
    specifiers: impl IntoIterator<Item = CharSpec>,
) -> Result<Grammar, GrammarError> {
    set(TerminalMode::Are, specifiers)
}

/// Match one character outside the set.
pub fn not_char_set(
    specifiers: impl IntoIterator<Item = CharSpec>,
) -> Result<Grammar, GrammarError> {
    set(TerminalMode::Not, specifiers)
}

fn set(
    mode: TerminalMode,
    specifiers: impl IntoIterator<Item = CharSpec>,
) -> Result<Grammar, GrammarError> {
    let specifiers: Vec<CharSpec> = specifiers.into_iter().collect();
    let mut ranges = Vec::with_capacity(specifiers.len());
    for specifier in &specifiers {
        ranges.extend(specifier.to_ranges()?);
    }
    Ok(Grammar::from_kind(
        "",
        Kind::CharSet {
            mode,
            specifiers,
            ranges,
        },
    ))
}
