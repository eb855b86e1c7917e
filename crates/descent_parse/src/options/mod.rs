//! Parser configuration.

use std::fmt;
use std::rc::Rc;

use descent_grammar::Grammar;
use descent_tree::Node;
use rustc_hash::FxHashMap;

use crate::{ConfigError, Parser};

/// Predicate deciding which nodes stay in a successful parse tree.
pub type NodeFilter = Rc<dyn Fn(&Node) -> bool>;

/// Builder for a [`Parser`].
///
/// | Option             | Default | Meaning                                      |
/// |--------------------|---------|----------------------------------------------|
/// | `grammar`          | none    | Root grammar; required                       |
/// | `alias`            | none    | Label reported instead of a grammar id       |
/// | `filter`           | none    | Drops nodes from a successful tree           |
/// | `must_consume_all` | `true`  | Fail when input is left after the root match |
#[derive(Clone)]
pub struct ParserOptions {
    grammar: Option<Grammar>,
    aliases: FxHashMap<String, String>,
    filter: Option<NodeFilter>,
    must_consume_all: bool,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self {
            grammar: None,
            aliases: FxHashMap::default(),
            filter: None,
            must_consume_all: true,
        }
    }

    /// Set the root grammar.
    #[must_use]
    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// Report `label` in failures instead of the grammar id `id`.
    ///
    /// Aliases only affect [`ParseFailure::expected`](crate::ParseFailure);
    /// trees keep the raw ids.
    #[must_use]
    pub fn alias(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.aliases.insert(id.into(), label.into());
        self
    }

    /// Add several aliases at once.
    #[must_use]
    pub fn aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|(id, label)| (id.into(), label.into())));
        self
    }

    /// Keep only nodes for which `predicate` returns `true`.
    ///
    /// Applied to every child of every `Syntax` in a successful tree, after
    /// that child's own children were filtered. The root itself is never
    /// removed.
    #[must_use]
    pub fn filter(mut self, predicate: impl Fn(&Node) -> bool + 'static) -> Self {
        self.filter = Some(Rc::new(predicate));
        self
    }

    /// Whether input left over after the root grammar matched is a failure.
    #[must_use]
    pub fn must_consume_all(mut self, must_consume_all: bool) -> Self {
        self.must_consume_all = must_consume_all;
        self
    }

    /// Validate the options and create the parser.
    pub fn build(self) -> Result<Parser, ConfigError> {
        let grammar = self.grammar.ok_or(ConfigError::MissingGrammar)?;
        if let Some((id, _)) = self.aliases.iter().find(|(_, label)| label.is_empty()) {
            return Err(ConfigError::EmptyAlias { id: id.clone() });
        }
        Ok(Parser::from_parts(
            grammar,
            self.aliases,
            self.filter,
            self.must_consume_all,
        ))
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParserOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserOptions")
            .field("grammar", &self.grammar)
            .field("aliases", &self.aliases)
            .field("filter", &self.filter.is_some())
            .field("must_consume_all", &self.must_consume_all)
            .finish()
    }
}

#[cfg(test)]
mod tests;
