//! Decoding errors raised by the scanner.

use thiserror::Error;

/// Malformed or out-of-range text detected while scanning.
///
/// These are fatal: the engine treats them as bad input data or a grammar
/// authoring mistake, never as an ordinary parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A surrogate unit without its partner.
    #[error("malformed text, unpaired surrogate at {at}")]
    UnpairedSurrogate {
        /// Unit offset of the offending surrogate.
        at: usize,
    },

    /// A read was attempted at or past the end of the text.
    #[error("unexpected end of text at {at}")]
    UnexpectedEnd {
        /// Unit offset of the attempted read.
        at: usize,
    },

    /// A one-character terminal was given no character at all.
    #[error("expected a single character, found an empty string")]
    EmptyCharacter,

    /// A one-character terminal was given more than one code point.
    #[error("expected a single character, found {units} code units")]
    MultipleCharacters {
        /// Length of the supplied text in code units.
        units: usize,
    },
}
