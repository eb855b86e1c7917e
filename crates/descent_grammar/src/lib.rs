//! Grammar combinators for descent.
//!
//! A [`Grammar`] is an immutable description of how to attempt a match at
//! the cursor. Terminals ([`lit`], [`char`], [`char_set`], ...) read code
//! points; structural combinators ([`sequence`], [`choose`], [`not`],
//! [`token`], [`reference`], ...) and the quantifier methods on `Grammar`
//! compose them into a recursive-descent parser with backtracking.
//!
//! Running a grammar yields an [`Outcome`](descent_tree::Outcome): a node,
//! the zero-width `Empty` success, or `Failed`. Ordinary mismatches are
//! values, never errors; [`Error`] is reserved for malformed text and
//! failing lazy references.
//!
//! # Backtracking
//!
//! All combinators share one `&mut Cursor`. Each run takes a
//! [`Mark`](descent_text::Mark) on entry; combinators that need to undo
//! consumption rewind to it. Sequences do not rewind on failure, their
//! caller's mark covers that.

mod context;
mod error;
pub mod events;
mod grammar;
mod graph;
mod stack;

pub use context::Context;
pub use error::{Error, GrammarError};
pub use events::{failed, on, traced};
pub use grammar::{
    char, char_set, choose, end, lit, not, not_char, not_char_set, reference, sequence, token,
    CharSpec, Grammar,
};
pub use graph::{GrammarGraph, TerminalMode};
