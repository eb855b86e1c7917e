//! Rewindable scan position over a unit buffer.
//!
//! The cursor is the engine's shared "next unit to read". Grammars receive
//! it as `&mut Cursor` and move `first` forward as they match; the only way
//! back is [`Cursor::rewind`] to a previously taken [`Mark`].
//!
//! `Cursor` is deliberately neither `Copy` nor `Clone`: a parse has exactly
//! one live cursor, and backtracking goes through marks, not copies.

use crate::{unicode, DecodeError};

/// A snapshot of a cursor's `first` position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    /// Unit offset captured by this mark.
    #[inline]
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Scan position bounded by `first` (current) and `last` (exclusive end).
#[derive(Debug)]
pub struct Cursor<'a> {
    units: &'a [u16],
    first: usize,
    last: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor spanning all of `units`.
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            units,
            first: 0,
            last: units.len(),
        }
    }

    /// Current position: the next unit to read.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// Exclusive end of the scan.
    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    /// Returns `true` when no input remains (`first == last`).
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.first >= self.last
    }

    /// Capture the current position.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark(self.first)
    }

    /// Restore a previously captured position.
    #[inline]
    pub fn rewind(&mut self, mark: Mark) {
        self.first = mark.0;
    }

    /// Read the code point at `first` and step past it.
    ///
    /// Fails with [`DecodeError::UnexpectedEnd`] at the end of the scan and
    /// with [`DecodeError::UnpairedSurrogate`] on malformed input; in both
    /// cases the position is unchanged.
    pub fn next_code_point(&mut self) -> Result<char, DecodeError> {
        unicode::code_point_at(self.units, &mut self.first)
    }

    /// The text consumed since `mark`.
    pub fn consumed_since(&self, mark: Mark) -> Result<String, DecodeError> {
        let start = mark.0.min(self.first);
        let span = self.units.get(start..self.first).unwrap_or_default();
        unicode::to_text(span).map_err(|err| match err {
            DecodeError::UnpairedSurrogate { at } => DecodeError::UnpairedSurrogate { at: start + at },
            other => other,
        })
    }
}
