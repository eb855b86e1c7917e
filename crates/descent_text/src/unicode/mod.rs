//! Code point decoding over UTF-16 code units.
//!
//! Decoding is built on [`char::decode_utf16`]; what this module adds is
//! position tracking, so every error names the unit offset it happened at,
//! and the single-character validation used by grammar terminals.

use crate::DecodeError;

/// Decode a unit buffer into its code points.
///
/// A valid high/low surrogate pair collapses into one code point. Any
/// unpaired surrogate fails the whole conversion.
pub fn to_unicode(units: &[u16]) -> Result<Vec<char>, DecodeError> {
    let mut at = 0;
    let mut points = Vec::with_capacity(units.len());
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(point) => {
                at += point.len_utf16();
                points.push(point);
            }
            Err(_) => return Err(DecodeError::UnpairedSurrogate { at }),
        }
    }
    Ok(points)
}

/// Re-encode code points as units. Inverse of [`to_unicode`].
pub fn from_unicode(points: &[char]) -> Vec<u16> {
    let mut units = Vec::with_capacity(points.len());
    let mut buf = [0u16; 2];
    for point in points {
        units.extend_from_slice(point.encode_utf16(&mut buf));
    }
    units
}

/// Encode a Rust string as units.
pub fn encode(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Decode a unit buffer into a `String`.
pub fn to_text(units: &[u16]) -> Result<String, DecodeError> {
    Ok(to_unicode(units)?.into_iter().collect())
}

/// Read one code point starting at `position`.
///
/// Advances `position` by one unit, or by two when the code point is
/// stored as a surrogate pair. Reading at or past the end of `units` is an
/// error; callers are expected to check bounds first.
pub fn code_point_at(units: &[u16], position: &mut usize) -> Result<char, DecodeError> {
    let at = *position;
    let rest = units.get(at..).unwrap_or_default();
    match char::decode_utf16(rest.iter().copied()).next() {
        None => Err(DecodeError::UnexpectedEnd { at }),
        Some(Err(_)) => Err(DecodeError::UnpairedSurrogate { at }),
        Some(Ok(point)) => {
            *position += point.len_utf16();
            Ok(point)
        }
    }
}

/// Validate that `units` hold exactly one code point and return it.
///
/// One unit, or exactly two forming a valid pair.
pub fn single_character_code_point(units: &[u16]) -> Result<char, DecodeError> {
    if units.is_empty() {
        return Err(DecodeError::EmptyCharacter);
    }

    let mut position = 0;
    let point = code_point_at(units, &mut position)?;
    if position != units.len() {
        return Err(DecodeError::MultipleCharacters { units: units.len() });
    }

    Ok(point)
}

/// [`single_character_code_point`] for a Rust string.
pub fn single_character(text: &str) -> Result<char, DecodeError> {
    single_character_code_point(&encode(text))
}
