//! Concrete syntax tree for descent.
//!
//! A successful, content-bearing match produces a [`Node`]:
//! - [`Token`]: a leaf holding the exact text matched
//! - [`Syntax`]: an ordered list of child nodes
//!
//! Every node carries the id of the grammar that produced it. Anonymous
//! (empty id) `Syntax` children are spliced into their parent when the
//! parent is built, so derived combinators never add tree depth.
//!
//! [`Outcome`] is what a grammar run yields: a node, the zero-width
//! [`Outcome::Empty`] success, or [`Outcome::Failed`].

mod node;
mod outcome;
mod syntax;

pub use node::{Node, NodeKind, ShapeError, Token};
pub use outcome::Outcome;
pub use syntax::Syntax;
