//! descent: parser combinators with backtracking.
//!
//! Grammars are built from small primitives and run over UTF-16 text by a
//! recursive-descent [`Parser`]. Matching works on Unicode code points, so
//! surrogate pairs are never split.
//!
//! # Crates
//!
//! | Crate             | Contents                                        |
//! |-------------------|-------------------------------------------------|
//! | `descent_text`    | Code point scanning, [`Cursor`], [`SourceText`] |
//! | `descent_tree`    | [`Node`], [`Token`], [`Syntax`], [`Outcome`]    |
//! | `descent_grammar` | [`Grammar`] and its combinators, event hooks    |
//! | `descent_parse`   | [`Parser`], [`ParserOptions`], [`Parsed`]       |
//!
//! # Example
//!
//! ```
//! use descent::{char_set, lit, reference, sequence, choose, token, Grammar, GrammarError, Parser};
//!
//! fn list() -> Result<Grammar, GrammarError> {
//!     let word = token(char_set([('a'..='z').into()])?.one_or_more()).named("word");
//!     let item = choose([word, reference(list)]);
//!     let items = sequence([item.clone(), sequence([lit(",")?, item]).zero_or_more()]);
//!     Ok(sequence([lit("[")?, items.maybe(), lit("]")?]).named("list"))
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = Parser::new(list()?).parse("[a,[b],c]")?.into_result()?;
//! assert_eq!(tree.query("list/word").map(|node| node.text()), Some("b".to_owned()));
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The engine logs through `tracing`. Call [`init_tracing`] to install a
//! subscriber driven by `RUST_LOG`; grammars wrapped with [`traced`] get a
//! span per attempt.

use std::sync::Once;

pub use descent_grammar::{
    char, char_set, choose, end, failed, lit, not, not_char, not_char_set, on, reference,
    sequence, token, traced, CharSpec, Context, Grammar, GrammarError, GrammarGraph, TerminalMode,
};
pub use descent_parse::{ConfigError, Error, NodeFilter, ParseFailure, Parsed, Parser, ParserOptions};
pub use descent_text::{
    code_point_at, encode, from_unicode, single_character, single_character_code_point, to_text,
    to_unicode, Cursor, DecodeError, Mark, SourceText,
};
pub use descent_tree::{Node, NodeKind, Outcome, ShapeError, Syntax, Token};

/// Errors from running a grammar directly, outside a [`Parser`].
pub use descent_grammar::Error as RunError;

static TRACING_INIT: Once = Once::new();

/// Install a global `tracing` subscriber, once.
///
/// Does nothing unless `RUST_LOG` is set; its value is the filter, e.g.
/// `RUST_LOG=descent_grammar=trace`. With `DESCENT_LOG_TREE` also set,
/// spans from [`traced`] grammars are rendered as an indented tree instead
/// of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("DESCENT_LOG_TREE").is_ok() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .init();
        }
    });
}
