//! The parse driver.

use std::fmt;
use std::sync::Arc;

use descent_grammar::{Context, Grammar};
use descent_text::{encode, Cursor, SourceText};
use descent_tree::{Node, Outcome, Syntax};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{Error, NodeFilter};

/// A parse that did not match.
///
/// `expected` is the id (or its alias) of the grammar attempted *last*
/// before the parse gave up. Every attempt overwrites it, successful ones
/// included, so in heavily alternated grammars it may name a late fallback
/// rather than the alternative that got furthest into the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {expected} at offset {at}")]
pub struct ParseFailure {
    /// Label of the last attempted grammar.
    pub expected: String,
    /// UTF-16 offset where matching stopped.
    pub at: usize,
}

/// Result of [`Parser::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Success(Node),
    Failure(ParseFailure),
}

impl Parsed {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Parsed::Success(_))
    }

    pub fn tree(&self) -> Option<&Node> {
        match self {
            Parsed::Success(node) => Some(node),
            Parsed::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ParseFailure> {
        match self {
            Parsed::Success(_) => None,
            Parsed::Failure(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<Node, ParseFailure> {
        match self {
            Parsed::Success(node) => Ok(node),
            Parsed::Failure(failure) => Err(failure),
        }
    }
}

/// Runs a root grammar over whole inputs.
///
/// A parser only holds configuration; each parse gets its own cursor and
/// [`Context`], so one parser serves any number of sequential parses.
pub struct Parser {
    grammar: Grammar,
    aliases: FxHashMap<String, String>,
    filter: Option<NodeFilter>,
    must_consume_all: bool,
}

impl Parser {
    /// A parser for `grammar` with default options.
    ///
    /// Use [`ParserOptions`](crate::ParserOptions) for aliases, a filter or
    /// partial matches.
    pub fn new(grammar: Grammar) -> Self {
        Self::from_parts(grammar, FxHashMap::default(), None, true)
    }

    pub(crate) fn from_parts(
        grammar: Grammar,
        aliases: FxHashMap<String, String>,
        filter: Option<NodeFilter>,
        must_consume_all: bool,
    ) -> Self {
        Self {
            grammar,
            aliases,
            filter,
            must_consume_all,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn parse(&self, input: &str) -> Result<Parsed, Error> {
        self.parse_units(&encode(input))
    }

    pub fn parse_text(&self, text: &SourceText) -> Result<Parsed, Error> {
        self.parse_units(text.as_units())
    }

    /// Parse raw UTF-16 units.
    ///
    /// An unpaired surrogate is reported as [`Error::Decode`] once the
    /// grammar reads it; input the grammar never reaches is not validated.
    pub fn parse_units(&self, units: &[u16]) -> Result<Parsed, Error> {
        let mut cursor = Cursor::new(units);
        let mut ctx = Context::new();
        let outcome = self.grammar.run(&mut ctx, &mut cursor)?;

        let node = match outcome {
            Outcome::Node(node) => node,
            // A root that matched nothing has no tree to return.
            Outcome::Empty | Outcome::Failed => return Ok(self.failure(&ctx, cursor.first())),
        };

        if self.must_consume_all && !cursor.is_at_end() {
            return Ok(self.failure(&ctx, cursor.first()));
        }

        debug!(root = node.id(), consumed = cursor.first(), "parse succeeded");
        Ok(Parsed::Success(match node {
            Node::Token(_) => node,
            Node::Syntax(syntax) => Node::Syntax(filter_syntax(syntax, self.filter.as_ref())),
        }))
    }

    fn failure(&self, ctx: &Context, at: usize) -> Parsed {
        let id = ctx.last_id().unwrap_or_else(|| self.grammar.id());
        let expected = self.aliases.get(id).map_or(id, String::as_str).to_owned();
        debug!(%expected, at, "parse failed");
        Parsed::Failure(ParseFailure { expected, at })
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("grammar", &self.grammar)
            .field("aliases", &self.aliases)
            .field("filter", &self.filter.is_some())
            .field("must_consume_all", &self.must_consume_all)
            .finish()
    }
}

/// Filter children bottom-up, then drop `Syntax` children left empty.
fn filter_syntax(syntax: Syntax, keep: Option<&NodeFilter>) -> Syntax {
    let id: Arc<str> = Arc::from(syntax.id());
    let children = syntax
        .into_children()
        .into_iter()
        .map(|child| match child {
            Node::Syntax(inner) => Node::Syntax(filter_syntax(inner, keep)),
            Node::Token(_) => child,
        })
        .filter(|child| keep.map_or(true, |keep| keep(child)))
        .filter(|child| !matches!(child, Node::Syntax(inner) if inner.is_empty()));
    Syntax::new(id, children)
}
