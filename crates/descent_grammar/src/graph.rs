//! Structural description of a grammar, for introspection and debugging.
//!
//! The graph is derived from the combinator kind; matching never consults
//! it. Lazy references are not resolved, so cyclic grammars render finitely.

use std::fmt;

use crate::{CharSpec, Grammar};

/// Whether a terminal set matches its members or everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalMode {
    /// Matches a member.
    Are,
    /// Matches a non-member.
    Not,
}

/// Tagged structure of one grammar node.
#[derive(Clone, Debug)]
pub enum GrammarGraph<'a> {
    Quantifier {
        target: &'a Grammar,
        min: usize,
        /// `None` is unbounded.
        max: Option<usize>,
    },
    Exclusion {
        target: &'a Grammar,
        excluded: &'a Grammar,
    },
    Optional {
        target: &'a Grammar,
    },
    Reference,
    Alternation {
        choices: &'a [Grammar],
    },
    Concatenation {
        parts: &'a [Grammar],
    },
    Negation {
        target: &'a Grammar,
    },
    Terminals {
        mode: TerminalMode,
        values: Vec<CharSpec>,
    },
    End,
}

impl GrammarGraph<'_> {
    /// Short name of the structure, e.g. `"alternation"`.
    pub fn tag(&self) -> &'static str {
        match self {
            GrammarGraph::Quantifier { .. } => "quantifier",
            GrammarGraph::Exclusion { .. } => "exclusion",
            GrammarGraph::Optional { .. } => "optional",
            GrammarGraph::Reference => "reference",
            GrammarGraph::Alternation { .. } => "alternation",
            GrammarGraph::Concatenation { .. } => "concatenation",
            GrammarGraph::Negation { .. } => "negation",
            GrammarGraph::Terminals { .. } => "terminals",
            GrammarGraph::End => "end",
        }
    }
}

/// Named grammars render as their id, anonymous ones inline.
fn operand(f: &mut fmt::Formatter<'_>, grammar: &Grammar) -> fmt::Result {
    if grammar.id().is_empty() {
        write!(f, "{}", grammar.graph())
    } else {
        f.write_str(grammar.id())
    }
}

fn joined(f: &mut fmt::Formatter<'_>, grammars: &[Grammar], separator: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, grammar) in grammars.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        operand(f, grammar)?;
    }
    f.write_str(")")
}

impl fmt::Display for GrammarGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarGraph::Quantifier { target, min, max } => {
                operand(f, target)?;
                match max {
                    Some(max) => write!(f, "{{{min},{max}}}"),
                    None => write!(f, "{{{min},}}"),
                }
            }
            GrammarGraph::Exclusion { target, excluded } => {
                f.write_str("(")?;
                operand(f, target)?;
                f.write_str(" - ")?;
                operand(f, excluded)?;
                f.write_str(")")
            }
            GrammarGraph::Optional { target } => {
                operand(f, target)?;
                f.write_str("?")
            }
            GrammarGraph::Reference => f.write_str("<ref>"),
            GrammarGraph::Alternation { choices } => joined(f, choices, " | "),
            GrammarGraph::Concatenation { parts } => joined(f, parts, " "),
            GrammarGraph::Negation { target } => {
                f.write_str("!")?;
                operand(f, target)
            }
            GrammarGraph::Terminals { mode, values } => {
                f.write_str(match mode {
                    TerminalMode::Are => "[",
                    TerminalMode::Not => "[^",
                })?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            GrammarGraph::End => f.write_str("$"),
        }
    }
}
