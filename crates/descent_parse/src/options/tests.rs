#![allow(clippy::unwrap_used)]

use super::*;
use descent_grammar::lit;
use pretty_assertions::assert_eq;

#[test]
fn build_requires_grammar() {
    let err = ParserOptions::new().alias("a", "letter a").build().unwrap_err();
    assert_eq!(err, ConfigError::MissingGrammar);
}

#[test]
fn build_rejects_empty_alias() {
    let err = ParserOptions::new()
        .grammar(lit("a").unwrap())
        .aliases([("a", "letter a"), ("b", "")])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyAlias { id: "b".into() });
}

#[test]
fn defaults() {
    let options = ParserOptions::default();
    assert!(options.must_consume_all);
    assert!(options.filter.is_none());
    assert!(options.aliases.is_empty());
}

#[test]
fn later_alias_wins() {
    let options = ParserOptions::new()
        .alias("num", "a number")
        .alias("num", "an integer");
    assert_eq!(options.aliases.get("num").map(String::as_str), Some("an integer"));
}

#[test]
fn debug_hides_filter_body() {
    let options = ParserOptions::new().filter(|_| true);
    let rendered = format!("{options:?}");
    assert!(rendered.contains("filter: true"), "{rendered}");
}
