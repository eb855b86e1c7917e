//! Driver errors.

use descent_text::DecodeError;
use descent_grammar::GrammarError;
use thiserror::Error;

/// Invalid parser configuration, reported by [`ParserOptions::build`].
///
/// [`ParserOptions::build`]: crate::ParserOptions::build
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `build()` was called without a root grammar.
    #[error("parser options have no root grammar")]
    MissingGrammar,

    /// An alias maps a grammar id to an empty label.
    #[error("alias for grammar `{id}` has an empty label")]
    EmptyAlias {
        /// The aliased grammar id.
        id: String,
    },
}

/// Fatal error during a parse.
///
/// A parse that simply does not match is not an error; see
/// [`Parsed::Failure`](crate::Parsed::Failure).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contains an unpaired surrogate.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A lazily referenced grammar failed to build.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

impl From<descent_grammar::Error> for Error {
    fn from(err: descent_grammar::Error) -> Self {
        match err {
            descent_grammar::Error::Decode(err) => Error::Decode(err),
            descent_grammar::Error::Grammar(err) => Error::Grammar(err),
        }
    }
}
