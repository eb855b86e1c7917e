//! Event hooks: observe a grammar's successes and failures.
//!
//! A hooked grammar is a decorator around the wrapped one. It matches exactly
//! like the grammar it wraps and reports the same id, graph and emptiness,
//! so it combines with `between`, `choose` and the rest like any other
//! grammar. Only the callback is added.

use std::rc::Rc;
use std::sync::Arc;

use descent_text::Cursor;
use descent_tree::{Node, Outcome};
use tracing::{debug, debug_span, trace};

use crate::grammar::Kind;
use crate::{Context, Error, Grammar};

type SuccessFn = Rc<dyn Fn(&Node)>;
type FailureFn = Rc<dyn Fn(&str, usize)>;

#[derive(Clone)]
pub(crate) enum Hook {
    Success(SuccessFn),
    Failure(FailureFn),
    Trace,
}

impl Hook {
    pub(crate) fn observe(
        &self,
        target: &Grammar,
        ctx: &mut Context,
        cursor: &mut Cursor<'_>,
    ) -> Result<Outcome, Error> {
        match self {
            Hook::Success(callback) => {
                let outcome = target.run(ctx, cursor)?;
                if let Outcome::Node(node) = &outcome {
                    callback(node);
                }
                Ok(outcome)
            }
            Hook::Failure(callback) => {
                let outcome = target.run(ctx, cursor)?;
                if outcome.is_failed() {
                    callback(target.id(), cursor.first());
                }
                Ok(outcome)
            }
            Hook::Trace => {
                let span = debug_span!("grammar", id = target.id(), at = cursor.first());
                let _entered = span.enter();
                let outcome = target.run(ctx, cursor);
                match &outcome {
                    Ok(Outcome::Node(node)) => debug!(node = node.id(), end = cursor.first(), "matched"),
                    Ok(Outcome::Empty) => debug!(end = cursor.first(), "matched empty"),
                    Ok(Outcome::Failed) => trace!(at = cursor.first(), "failed"),
                    Err(err) => debug!(%err, "aborted"),
                }
                outcome
            }
        }
    }
}

fn wrap(grammar: Grammar, hook: Hook) -> Grammar {
    let id = Arc::clone(grammar.shared_id());
    Grammar::from_kind(
        id,
        Kind::Hook {
            target: grammar,
            hook,
        },
    )
}

/// Call `callback` with the node each time `grammar` matches with content.
///
/// Zero-width (`Empty`) successes and failures do not trigger it.
pub fn on(grammar: Grammar, callback: impl Fn(&Node) + 'static) -> Grammar {
    wrap(grammar, Hook::Success(Rc::new(callback)))
}

/// Call `callback` with the grammar's id and the cursor position each time
/// `grammar` fails.
///
/// The position is where the cursor was left by the failed attempt.
pub fn failed(grammar: Grammar, callback: impl Fn(&str, usize) + 'static) -> Grammar {
    wrap(grammar, Hook::Failure(Rc::new(callback)))
}

/// Emit `tracing` events for every attempt of `grammar`.
///
/// Each attempt runs inside a `grammar` span at debug level; matches are
/// logged at debug, failures at trace.
pub fn traced(grammar: Grammar) -> Grammar {
    wrap(grammar, Hook::Trace)
}

#[cfg(test)]
mod tests;
