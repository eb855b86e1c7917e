//! Branch nodes and path queries.

use std::sync::Arc;

use crate::{Node, Token};

/// An ordered list of child nodes produced by one grammar.
///
/// Construction splices in the children of any anonymous (empty id)
/// `Syntax` child instead of nesting it. Anonymous tokens stay as they are.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Syntax {
    id: Arc<str>,
    children: Vec<Node>,
}

impl Syntax {
    /// Create a syntax node, flattening anonymous syntax children.
    pub fn new(id: impl Into<Arc<str>>, children: impl IntoIterator<Item = Node>) -> Self {
        let mut flat = Vec::new();
        for child in children {
            match child {
                Node::Syntax(inner) if inner.id.is_empty() => flat.extend(inner.children),
                other => flat.push(other),
            }
        }
        Self {
            id: id.into(),
            children: flat,
        }
    }

    /// Id of the grammar that produced the node.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// First direct child with the given id.
    pub fn child(&self, id: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.id() == id)
    }

    /// Find a descendant by a slash-separated path of ids.
    ///
    /// Each segment selects the first child with exactly that id; a
    /// leading slash is optional. Returns `None` if a segment is missing,
    /// if the path tries to descend into a token, or if the path names no
    /// segment at all.
    pub fn query(&self, path: &str) -> Option<&Node> {
        let path = path.strip_prefix('/').unwrap_or(path);
        if path.is_empty() {
            return None;
        }

        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut node = self.child(first)?;
        for segment in segments {
            node = match node {
                Node::Syntax(syntax) => syntax.child(segment)?,
                Node::Token(_) => return None,
            };
        }
        Some(node)
    }

    /// [`query`](Self::query), asserting the result is a token.
    pub fn query_token(&self, path: &str) -> Option<&Token> {
        self.query(path).and_then(Node::as_token)
    }

    /// [`query`](Self::query), asserting the result is a syntax node.
    pub fn query_syntax(&self, path: &str) -> Option<&Syntax> {
        self.query(path).and_then(Node::as_syntax)
    }
}

impl<'a> IntoIterator for &'a Syntax {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
