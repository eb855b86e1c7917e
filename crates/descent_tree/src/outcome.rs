//! Three-way result of running a grammar.

use crate::Node;

/// Result of one grammar attempt.
///
/// | Variant  | Meaning                                  |
/// |----------|------------------------------------------|
/// | `Node`   | Matched and produced content             |
/// | `Empty`  | Matched, produced nothing (zero-width)   |
/// | `Failed` | Did not match; try something else        |
///
/// `Empty` is a success. Only `Failed` makes an enclosing sequence fail or
/// an alternation move on to its next choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Content-bearing success.
    Node(Node),
    /// Zero-width success.
    Empty,
    /// No match.
    Failed,
}

impl Outcome {
    /// Returns `true` for `Node` and `Empty`.
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Returns `true` for `Failed`.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Returns `true` for `Empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The produced node, if any.
    pub fn node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Empty | Self::Failed => None,
        }
    }

    /// Consume the outcome, keeping the produced node, if any.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Empty | Self::Failed => None,
        }
    }
}

impl From<Node> for Outcome {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}
