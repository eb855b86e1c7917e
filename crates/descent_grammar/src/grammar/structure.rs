//! Structural constructors.

use std::rc::Rc;

use super::{Grammar, Kind};
use crate::GrammarError;

/// Match every part in order.
///
/// Parts that succeed with `Empty` contribute no child. The result is one
/// anonymous `Syntax`, even when no part produced content. A failing part
/// fails the sequence without rewinding.
pub fn sequence(parts: impl IntoIterator<Item = Grammar>) -> Grammar {
    Grammar::from_kind(
        "",
        Kind::Concatenation {
            parts: parts.into_iter().collect(),
        },
    )
}

/// Match the first option that succeeds, in order.
///
/// Anonymous alternations return the winning option's result as-is; a
/// named one wraps it in a `Syntax` under its own id.
pub fn choose(options: impl IntoIterator<Item = Grammar>) -> Grammar {
    Grammar::from_kind(
        "",
        Kind::Alternation {
            choices: options.into_iter().collect(),
        },
    )
}

/// Zero-width negative lookahead.
///
/// Succeeds with `Empty` where `target` fails; consumes nothing either way.
pub fn not(target: Grammar) -> Grammar {
    Grammar::from_kind("", Kind::Negation { target })
}

/// Match the end of the input.
pub fn end() -> Grammar {
    Grammar::from_kind("end of stream", Kind::End)
}

/// Match `target` and return the consumed text as one `Token`.
pub fn token(target: Grammar) -> Grammar {
    Grammar::from_kind("", Kind::Token { target })
}

/// Refer to a grammar built on demand at parse time.
///
/// This is how recursive grammars are written: the resolver runs each
/// time the reference is matched, so a grammar can mention itself without
/// being constructed infinitely.
///
/// ```
/// use descent_grammar::{choose, lit, reference, sequence, Grammar, GrammarError};
///
/// fn nested() -> Result<Grammar, GrammarError> {
///     Ok(choose([
///         sequence([lit("(")?, reference(nested), lit(")")?]),
///         lit("x")?,
///     ]))
/// }
/// # assert!(nested().is_ok());
/// ```
pub fn reference<F>(resolve: F) -> Grammar
where
    F: Fn() -> Result<Grammar, GrammarError> + 'static,
{
    Grammar::from_kind(
        "",
        Kind::Reference {
            resolve: Rc::new(resolve),
        },
    )
}
