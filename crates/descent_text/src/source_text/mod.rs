//! Owned unit buffer for parser input.
//!
//! A `SourceText` built from a Rust string is always well formed. One built
//! from raw units may contain unpaired surrogates; those are reported when
//! scanning reaches them, or up front via [`SourceText::validate`].

use crate::{to_unicode, Cursor, DecodeError};

/// Owned UTF-16 text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceText {
    units: Vec<u16>,
}

impl SourceText {
    /// Encode a string.
    pub fn new(text: &str) -> Self {
        Self {
            units: crate::encode(text),
        }
    }

    /// Wrap raw units without validating them.
    pub fn from_units(units: impl Into<Vec<u16>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// Length in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the text has no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The raw units.
    #[inline]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Check the whole text for unpaired surrogates.
    pub fn validate(&self) -> Result<(), DecodeError> {
        to_unicode(&self.units).map(|_| ())
    }

    /// Create a cursor at the start of the text.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.units)
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl From<Vec<u16>> for SourceText {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}
