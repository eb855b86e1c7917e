//! Leaf tokens and the `Node` sum type.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::Syntax;

/// A leaf: the exact text a grammar matched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    id: Arc<str>,
    value: String,
}

impl Token {
    /// Create a token produced by grammar `id`.
    pub fn new(id: impl Into<Arc<str>>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Id of the grammar that produced the token.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The matched text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the token, keeping its text.
    pub fn into_value(self) -> String {
        self.value
    }
}

/// Kind of a [`Node`], used for kind assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A [`Token`] leaf.
    Token,
    /// A [`Syntax`] branch.
    Syntax,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Token => f.write_str("token"),
            NodeKind::Syntax => f.write_str("syntax"),
        }
    }
}

/// A node did not have the expected shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Token found where syntax was expected, or the reverse.
    #[error("expected a {expected} node, found a {found} node")]
    WrongKind {
        /// Kind that was asked for.
        expected: NodeKind,
        /// Kind that was found.
        found: NodeKind,
    },

    /// The node kind matched but its id did not.
    #[error("expected node `{expected}`, found `{found}`")]
    WrongId {
        /// Id that was asked for.
        expected: String,
        /// Id that was found.
        found: String,
    },
}

/// Result of a content-bearing match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// Leaf.
    Token(Token),
    /// Branch.
    Syntax(Syntax),
}

impl Node {
    /// Id of the grammar that produced the node.
    pub fn id(&self) -> &str {
        match self {
            Node::Token(token) => token.id(),
            Node::Syntax(syntax) => syntax.id(),
        }
    }

    /// Which kind of node this is.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Token(_) => NodeKind::Token,
            Node::Syntax(_) => NodeKind::Syntax,
        }
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        matches!(self, Node::Token(_))
    }

    #[inline]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Node::Syntax(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            Node::Syntax(_) => None,
        }
    }

    pub fn as_syntax(&self) -> Option<&Syntax> {
        match self {
            Node::Syntax(syntax) => Some(syntax),
            Node::Token(_) => None,
        }
    }

    /// All token text under this node, concatenated in order.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Token(token) => out.push_str(token.value()),
            Node::Syntax(syntax) => {
                for child in syntax.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Query below this node. A token has no named children, so querying
    /// one always yields `None`.
    pub fn query(&self, path: &str) -> Option<&Node> {
        self.as_syntax().and_then(|syntax| syntax.query(path))
    }

    /// Verify this node is a token, optionally with the given id.
    pub fn expect_token(&self, id: Option<&str>) -> Result<&Token, ShapeError> {
        let Node::Token(token) = self else {
            return Err(ShapeError::WrongKind {
                expected: NodeKind::Token,
                found: self.kind(),
            });
        };
        check_id(id, token.id())?;
        Ok(token)
    }

    /// Verify this node is a syntax node, optionally with the given id.
    pub fn expect_syntax(&self, id: Option<&str>) -> Result<&Syntax, ShapeError> {
        let Node::Syntax(syntax) = self else {
            return Err(ShapeError::WrongKind {
                expected: NodeKind::Syntax,
                found: self.kind(),
            });
        };
        check_id(id, syntax.id())?;
        Ok(syntax)
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = depth * 2;
        match self {
            Node::Token(token) => {
                writeln!(f, "{:indent$}{} {:?}", "", display_id(token.id()), token.value())
            }
            Node::Syntax(syntax) => {
                writeln!(f, "{:indent$}{}", "", display_id(syntax.id()))?;
                for child in syntax.children() {
                    child.fmt_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

fn check_id(expected: Option<&str>, found: &str) -> Result<(), ShapeError> {
    match expected {
        Some(expected) if expected != found => Err(ShapeError::WrongId {
            expected: expected.to_owned(),
            found: found.to_owned(),
        }),
        _ => Ok(()),
    }
}

fn display_id(id: &str) -> &str {
    if id.is_empty() {
        "<anonymous>"
    } else {
        id
    }
}

/// Renders the node as an indented tree, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::Token(token)
    }
}

impl From<Syntax> for Node {
    fn from(syntax: Syntax) -> Self {
        Node::Syntax(syntax)
    }
}

#[cfg(test)]
mod tests;
