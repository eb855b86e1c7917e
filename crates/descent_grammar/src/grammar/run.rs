//! The backtracking run loop.
//!
//! `run` is the public entry every combinator goes through: boundary
//! check, last-attempted bookkeeping, entry mark. `parse` holds the
//! per-kind matching logic.

use std::sync::Arc;

use descent_text::{Cursor, Mark};
use descent_tree::{Node, Outcome, Syntax, Token};
use tracing::trace;

use super::{Grammar, Kind};
use crate::graph::TerminalMode;
use crate::stack::ensure_sufficient_stack;
use crate::{Context, Error};

impl Grammar {
    /// Attempt this grammar at the cursor.
    ///
    /// With no input left this fails immediately, except for `end()`, which
    /// succeeds there, and `maybe()`, which succeeds with `Empty`. Otherwise
    /// the grammar's id becomes `ctx`'s last attempted id before matching.
    ///
    /// On `Outcome::Failed` the cursor may have moved; whoever holds a mark
    /// from before the attempt is responsible for rewinding.
    pub fn run(&self, ctx: &mut Context, cursor: &mut Cursor<'_>) -> Result<Outcome, Error> {
        ensure_sufficient_stack(|| self.run_guarded(ctx, cursor))
    }

    fn run_guarded(&self, ctx: &mut Context, cursor: &mut Cursor<'_>) -> Result<Outcome, Error> {
        match self.kind() {
            Kind::End => {
                return Ok(if cursor.is_at_end() {
                    Outcome::Empty
                } else {
                    Outcome::Failed
                });
            }
            Kind::Hook { target, hook } => return hook.observe(target, ctx, cursor),
            _ => {}
        }

        if cursor.is_at_end() {
            return Ok(match self.kind() {
                Kind::Optional { .. } => Outcome::Empty,
                _ => Outcome::Failed,
            });
        }

        ctx.attempt(self.shared_id());
        let start = cursor.mark();
        trace!(id = self.id(), at = start.offset(), "attempt");
        self.parse(ctx, cursor, start)
    }

    fn parse(&self, ctx: &mut Context, cursor: &mut Cursor<'_>, start: Mark) -> Result<Outcome, Error> {
        match self.kind() {
            Kind::Literal { value, points } => {
                for &expected in points {
                    if cursor.is_at_end() || cursor.next_code_point()? != expected {
                        cursor.rewind(start);
                        return Ok(Outcome::Failed);
                    }
                }
                Ok(self.leaf(value.clone()))
            }

            Kind::Char { value, point } => {
                if cursor.next_code_point()? == *point {
                    Ok(self.leaf(value.clone()))
                } else {
                    cursor.rewind(start);
                    Ok(Outcome::Failed)
                }
            }

            Kind::NotChar { point } => {
                let current = cursor.next_code_point()?;
                if current == *point {
                    cursor.rewind(start);
                    Ok(Outcome::Failed)
                } else {
                    Ok(self.leaf(current.to_string()))
                }
            }

            Kind::CharSet { mode, ranges, .. } => {
                let current = cursor.next_code_point()?;
                let member = ranges.iter().any(|range| range.contains(&current));
                if member == (*mode == TerminalMode::Are) {
                    Ok(self.leaf(current.to_string()))
                } else {
                    cursor.rewind(start);
                    Ok(Outcome::Failed)
                }
            }

            Kind::Quantifier { target, min, max } => {
                let mut children = Vec::new();
                let mut count = 0;
                while max.map_or(true, |max| count < max) {
                    let before = cursor.mark();
                    match target.run(ctx, cursor)? {
                        Outcome::Node(node) => {
                            children.push(node);
                            count += 1;
                            // A node that consumed nothing would repeat
                            // forever at this position.
                            if cursor.first() == before.offset() {
                                count = count.max(*min);
                                break;
                            }
                        }
                        // Every further attempt here would be the same
                        // zero-width match.
                        Outcome::Empty => {
                            count = count.max(*min);
                            break;
                        }
                        Outcome::Failed => {
                            cursor.rewind(before);
                            break;
                        }
                    }
                }

                if count < *min {
                    cursor.rewind(start);
                    return Ok(Outcome::Failed);
                }
                Ok(self.branch(children))
            }

            Kind::Exclusion { target, excluded } => {
                let blocked = excluded.run(ctx, cursor)?.is_success();
                cursor.rewind(start);
                if blocked {
                    return Ok(Outcome::Failed);
                }
                target.run(ctx, cursor)
            }

            Kind::Optional { target } => match target.run(ctx, cursor)? {
                Outcome::Failed => {
                    cursor.rewind(start);
                    Ok(Outcome::Empty)
                }
                outcome => Ok(outcome),
            },

            Kind::Reference { resolve } => {
                let target = resolve()?;
                target.run(ctx, cursor)
            }

            Kind::Alternation { choices } => {
                for choice in choices {
                    cursor.rewind(start);
                    let outcome = choice.run(ctx, cursor)?;
                    if outcome.is_failed() {
                        continue;
                    }
                    if self.id().is_empty() {
                        return Ok(outcome);
                    }
                    return Ok(self.branch(outcome.into_node()));
                }
                Ok(Outcome::Failed)
            }

            Kind::Concatenation { parts } => {
                let mut children = Vec::with_capacity(parts.len());
                for part in parts {
                    match part.run(ctx, cursor)? {
                        Outcome::Node(node) => children.push(node),
                        Outcome::Empty => {}
                        Outcome::Failed => return Ok(Outcome::Failed),
                    }
                }
                Ok(self.branch(children))
            }

            Kind::Negation { target } => {
                let matched = target.run(ctx, cursor)?.is_success();
                cursor.rewind(start);
                Ok(if matched {
                    Outcome::Failed
                } else {
                    Outcome::Empty
                })
            }

            Kind::Token { target } => {
                if target.run(ctx, cursor)?.is_failed() {
                    return Ok(Outcome::Failed);
                }
                Ok(self.leaf(cursor.consumed_since(start)?))
            }

            // Handled in `run_guarded` before the boundary check.
            Kind::End | Kind::Hook { .. } => Ok(Outcome::Failed),
        }
    }

    fn leaf(&self, value: String) -> Outcome {
        Outcome::Node(Node::Token(Token::new(Arc::clone(self.shared_id()), value)))
    }

    fn branch(&self, children: impl IntoIterator<Item = Node>) -> Outcome {
        Outcome::Node(Node::Syntax(Syntax::new(Arc::clone(self.shared_id()), children)))
    }
}
