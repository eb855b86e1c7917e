//! Grammar construction and run-time errors.

use descent_text::DecodeError;
use thiserror::Error;

/// A grammar could not be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// `lit("")`.
    #[error("a literal must be one or more characters in length")]
    EmptyLiteral,

    /// A terminal was given text that is not what it needs, e.g. two
    /// characters where exactly one is required.
    #[error("invalid terminal `{value}`: {source}")]
    InvalidTerminal {
        /// The text supplied by the grammar author.
        value: String,
        /// What the scanner rejected.
        #[source]
        source: DecodeError,
    },

    /// `between(min, max)` with `min > max`.
    #[error("repetition minimum {min} exceeds maximum {max}")]
    InvalidRepetition {
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },

    /// A lazy reference could not produce its grammar.
    #[error("reference could not be resolved: {reason}")]
    Unresolved {
        /// Why resolution failed.
        reason: String,
    },
}

/// Fatal error while running a grammar.
///
/// Ordinary mismatches never end up here; they are `Outcome::Failed`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The input text is malformed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A lazily referenced grammar failed to build.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}
