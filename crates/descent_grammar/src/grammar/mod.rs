//! The `Grammar` value and its combinator kinds.
//!
//! Every combinator is one variant of a closed [`Kind`] enum; the run loop
//! in `run.rs` matches on it exhaustively. A `Grammar` is a cheap handle
//! (`Rc`) to an immutable node, so combinators clone their operands freely
//! and grammars can be shared between many parents.

use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::sync::Arc;

use crate::events::Hook;
use crate::graph::{GrammarGraph, TerminalMode};
use crate::GrammarError;

mod run;
mod structure;
mod terminal;

pub use structure::{choose, end, not, reference, sequence, token};
pub use terminal::{char, char_set, lit, not_char, not_char_set, CharSpec};

/// Resolves a lazy reference at parse time.
pub(crate) type Resolver = Rc<dyn Fn() -> Result<Grammar, GrammarError>>;

#[derive(Clone)]
pub(crate) enum Kind {
    Literal {
        value: String,
        points: Vec<char>,
    },
    Char {
        value: String,
        point: char,
    },
    NotChar {
        point: char,
    },
    CharSet {
        mode: TerminalMode,
        specifiers: Vec<CharSpec>,
        ranges: Vec<RangeInclusive<char>>,
    },
    Quantifier {
        target: Grammar,
        min: usize,
        max: Option<usize>,
    },
    Exclusion {
        target: Grammar,
        excluded: Grammar,
    },
    Optional {
        target: Grammar,
    },
    Reference {
        resolve: Resolver,
    },
    Alternation {
        choices: Vec<Grammar>,
    },
    Concatenation {
        parts: Vec<Grammar>,
    },
    Negation {
        target: Grammar,
    },
    End,
    Token {
        target: Grammar,
    },
    /// Event decorator; transparent except for its callback.
    Hook {
        target: Grammar,
        hook: Hook,
    },
}

struct GrammarNode {
    id: Arc<str>,
    kind: Kind,
}

/// An immutable grammar.
///
/// Cloning is cheap and shares the underlying node.
#[derive(Clone)]
pub struct Grammar {
    node: Rc<GrammarNode>,
}

impl Grammar {
    pub(crate) fn from_kind(id: impl Into<Arc<str>>, kind: Kind) -> Self {
        Self {
            node: Rc::new(GrammarNode {
                id: id.into(),
                kind,
            }),
        }
    }

    #[inline]
    pub(crate) fn kind(&self) -> &Kind {
        &self.node.kind
    }

    #[inline]
    pub(crate) fn shared_id(&self) -> &Arc<str> {
        &self.node.id
    }

    /// The grammar's label; empty for anonymous grammars.
    #[inline]
    pub fn id(&self) -> &str {
        &self.node.id
    }

    /// Structural description of this grammar.
    ///
    /// Tokenizing and hooked grammars report their target's structure.
    pub fn graph(&self) -> GrammarGraph<'_> {
        match self.kind() {
            Kind::Literal { value, .. } | Kind::Char { value, .. } => GrammarGraph::Terminals {
                mode: TerminalMode::Are,
                values: vec![CharSpec::Chars(value.clone())],
            },
            Kind::NotChar { point } => GrammarGraph::Terminals {
                mode: TerminalMode::Not,
                values: vec![CharSpec::Chars(point.to_string())],
            },
            Kind::CharSet {
                mode, specifiers, ..
            } => GrammarGraph::Terminals {
                mode: *mode,
                values: specifiers.clone(),
            },
            Kind::Quantifier { target, min, max } => GrammarGraph::Quantifier {
                target,
                min: *min,
                max: *max,
            },
            Kind::Exclusion { target, excluded } => GrammarGraph::Exclusion { target, excluded },
            Kind::Optional { target } => GrammarGraph::Optional { target },
            Kind::Reference { .. } => GrammarGraph::Reference,
            Kind::Alternation { choices } => GrammarGraph::Alternation { choices },
            Kind::Concatenation { parts } => GrammarGraph::Concatenation { parts },
            Kind::Negation { target } => GrammarGraph::Negation { target },
            Kind::End => GrammarGraph::End,
            Kind::Token { target } | Kind::Hook { target, .. } => target.graph(),
        }
    }

    /// Whether a success may carry no content (`Outcome::Empty`).
    ///
    /// True for optional, negation and end-of-stream, and for anonymous
    /// alternations or exclusions over such grammars. A lazy reference
    /// reports `false`; its target is not known until parse time.
    pub fn could_return_empty(&self) -> bool {
        match self.kind() {
            Kind::Optional { .. } | Kind::Negation { .. } | Kind::End => true,
            Kind::Alternation { choices } => {
                self.id().is_empty() && choices.iter().any(Grammar::could_return_empty)
            }
            Kind::Exclusion { target, .. } | Kind::Hook { target, .. } => {
                target.could_return_empty()
            }
            Kind::Literal { .. }
            | Kind::Char { .. }
            | Kind::NotChar { .. }
            | Kind::CharSet { .. }
            | Kind::Quantifier { .. }
            | Kind::Reference { .. }
            | Kind::Concatenation { .. }
            | Kind::Token { .. } => false,
        }
    }

    /// The same grammar under a different id.
    ///
    /// Every constructor picks a default id (the text for literals and
    /// characters, empty for derived combinators); `named` replaces it.
    /// Hooks stay attached.
    #[must_use]
    pub fn named(&self, id: impl Into<Arc<str>>) -> Grammar {
        let id = id.into();
        let kind = match self.kind() {
            Kind::Hook { target, hook } => Kind::Hook {
                target: target.named(Arc::clone(&id)),
                hook: hook.clone(),
            },
            other => other.clone(),
        };
        Grammar::from_kind(id, kind)
    }

    // === Quantifiers ===

    /// Repeat greedily, at least `min` and at most `max` times.
    ///
    /// Fails, rewinding to where it started, if fewer than `min`
    /// repetitions match. Otherwise succeeds with one anonymous `Syntax`
    /// holding every repetition's node.
    pub fn between(&self, min: usize, max: usize) -> Result<Grammar, GrammarError> {
        if min > max {
            return Err(GrammarError::InvalidRepetition { min, max });
        }
        Ok(self.repeat(min, Some(max)))
    }

    /// Repeat at least `min` times, without upper bound.
    #[must_use]
    pub fn at_least(&self, min: usize) -> Grammar {
        self.repeat(min, None)
    }

    /// Repeat up to `max` times.
    #[must_use]
    pub fn at_most(&self, max: usize) -> Grammar {
        self.repeat(0, Some(max))
    }

    #[must_use]
    pub fn zero_or_more(&self) -> Grammar {
        self.repeat(0, None)
    }

    #[must_use]
    pub fn one_or_more(&self) -> Grammar {
        self.repeat(1, None)
    }

    fn repeat(&self, min: usize, max: Option<usize>) -> Grammar {
        Grammar::from_kind(
            "",
            Kind::Quantifier {
                target: self.clone(),
                min,
                max,
            },
        )
    }

    // === Exclusion and option ===

    /// Match this grammar only where `excluded` does not match.
    #[must_use]
    pub fn but_not(&self, excluded: Grammar) -> Grammar {
        Grammar::from_kind(
            "",
            Kind::Exclusion {
                target: self.clone(),
                excluded,
            },
        )
    }

    /// Match this grammar or nothing.
    ///
    /// Succeeds with `Empty` when the target fails, including at the end of
    /// the input.
    #[must_use]
    pub fn maybe(&self) -> Grammar {
        Grammar::from_kind(
            "",
            Kind::Optional {
                target: self.clone(),
            },
        )
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("id", &self.id())
            .field("graph", &self.graph().tag())
            .finish()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.graph())
    }
}
