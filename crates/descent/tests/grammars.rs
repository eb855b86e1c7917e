//! End-to-end tests: realistic recursive grammars through the parser.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use descent::{
    char_set, choose, end, failed, lit, not, on, reference, sequence, token, Grammar,
    GrammarError, Node, ParseFailure, Parsed, Parser, ParserOptions, Syntax, Token,
};
use pretty_assertions::assert_eq;

// -- Arithmetic --

fn number() -> Result<Grammar, GrammarError> {
    Ok(token(char_set([('0'..='9').into()])?.one_or_more()).named("number"))
}

fn expr() -> Result<Grammar, GrammarError> {
    let operator = choose([lit("+")?, lit("-")?]);
    Ok(sequence([reference(term), sequence([operator, reference(term)]).zero_or_more()]).named("expr"))
}

fn term() -> Result<Grammar, GrammarError> {
    let operator = choose([lit("*")?, lit("/")?]);
    Ok(sequence([reference(factor), sequence([operator, reference(factor)]).zero_or_more()]).named("term"))
}

fn factor() -> Result<Grammar, GrammarError> {
    let group = sequence([lit("(")?, reference(expr), lit(")")?]).named("group");
    Ok(choose([number()?, group]))
}

fn eval(node: &Node) -> i64 {
    match node {
        Node::Token(token) => token.value().parse().unwrap(),
        Node::Syntax(syntax) if syntax.id() == "group" => eval(&syntax.children()[1]),
        Node::Syntax(syntax) => {
            let children = syntax.children();
            let mut value = eval(&children[0]);
            for pair in children[1..].chunks(2) {
                let rhs = eval(&pair[1]);
                value = match pair[0].text().as_str() {
                    "+" => value + rhs,
                    "-" => value - rhs,
                    "*" => value * rhs,
                    "/" => value / rhs,
                    other => panic!("unexpected operator {other}"),
                };
            }
            value
        }
    }
}

fn calculate(input: &str) -> Parsed {
    Parser::new(expr().unwrap()).parse(input).unwrap()
}

#[test]
fn arithmetic_precedence() {
    for (input, expected) in [
        ("7", 7),
        ("1+2*3", 7),
        ("(1+2)*3", 9),
        ("2*(3+4)-5", 9),
        ("100/(2+3)/2", 10),
        ("((((1))))", 1),
    ] {
        let tree = calculate(input).into_result().unwrap();
        assert_eq!(eval(&tree), expected, "{input}");
        assert_eq!(tree.text(), input);
    }
}

#[test]
fn arithmetic_tree_shape() {
    let tree = calculate("1+2").into_result().unwrap();
    let expected = Node::Syntax(Syntax::new(
        "expr",
        [
            Node::Syntax(Syntax::new("term", [Node::Token(Token::new("number", "1"))])),
            Node::Token(Token::new("+", "+")),
            Node::Syntax(Syntax::new("term", [Node::Token(Token::new("number", "2"))])),
        ],
    ));
    assert_eq!(tree, expected);
    assert_eq!(tree.query("term/number").map(Node::text), Some("1".to_owned()));
}

#[test]
fn arithmetic_trailing_operator() {
    // The dangling `+` is rewound; the whole input was not consumed.
    assert_eq!(
        calculate("1+"),
        Parsed::Failure(ParseFailure {
            expected: "+".into(),
            at: 1,
        })
    );
}

#[test]
fn arithmetic_unclosed_group() {
    let failure = calculate("(1+2").into_result().unwrap_err();
    assert_eq!(failure.at, 4);
}

#[test]
fn deeply_nested_arithmetic() {
    let depth = 500;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let tree = calculate(&input).into_result().unwrap();
    assert_eq!(eval(&tree), 1);
}

// -- Nested lists --

fn list() -> Result<Grammar, GrammarError> {
    let word = token(char_set([('a'..='z').into()])?.one_or_more()).named("word");
    let item = choose([word, reference(list)]);
    let items = sequence([item.clone(), sequence([lit(",")?, item]).zero_or_more()]);
    Ok(sequence([lit("[")?, items.maybe(), lit("]")?]).named("list"))
}

fn list_parser() -> Parser {
    ParserOptions::new()
        .grammar(list().unwrap())
        .filter(|node| !matches!(node.id(), "[" | "]" | ","))
        .alias("]", "a closing bracket")
        .build()
        .unwrap()
}

#[test]
fn nested_lists_filtered() {
    let tree = list_parser().parse("[a,[b,cd],[]]").unwrap().into_result().unwrap();
    let root = tree.expect_syntax(Some("list")).unwrap();
    // `[]` had only punctuation, so it was pruned entirely.
    assert_eq!(root.len(), 2);
    assert_eq!(root.query_token("word").unwrap().value(), "a");
    let inner = root.query_syntax("list").unwrap();
    let words: Vec<_> = inner.iter().map(Node::text).collect();
    assert_eq!(words, vec!["b", "cd"]);
}

#[test]
fn empty_list_keeps_root() {
    let tree = list_parser().parse("[]").unwrap().into_result().unwrap();
    assert_eq!(tree, Node::Syntax(Syntax::new("list", [])));
}

#[test]
fn list_failure_uses_alias() {
    let failure = list_parser().parse("[a,b").unwrap().into_result().unwrap_err();
    assert_eq!(failure.at, 4);

    let failure = list_parser().parse("[a b]").unwrap().into_result().unwrap_err();
    assert_eq!(failure.expected, "a closing bracket");
    assert_eq!(failure.at, 2);
}

#[test]
fn list_display() {
    let tree = Parser::new(list().unwrap()).parse("[x]").unwrap().into_result().unwrap();
    assert_eq!(tree.to_string(), "list\n  [ \"[\"\n  word \"x\"\n  ] \"]\"\n");
}

// -- Keywords and lookahead --

#[test]
fn identifiers_exclude_keywords() {
    let letter = char_set([('a'..='z').into()]).unwrap();
    let word = token(letter.one_or_more()).named("identifier");
    let keyword = sequence([
        choose([lit("let").unwrap(), lit("in").unwrap()]),
        not(letter),
    ]);
    let identifier = word.but_not(keyword);
    let parser = Parser::new(sequence([identifier, lit(";").unwrap()]).named("statement"));

    assert!(parser.parse("letter;").unwrap().is_success());
    assert!(parser.parse("inner;").unwrap().is_success());
    assert!(!parser.parse("let;").unwrap().is_success());
    assert!(!parser.parse("in;").unwrap().is_success());
}

#[test]
fn lookahead_fails_at_end_of_input() {
    // `not` is an ordinary attempt, so with nothing left to read it fails
    // rather than succeeding vacuously.
    let parser = Parser::new(sequence([lit("a").unwrap(), not(lit("b").unwrap())]));
    assert!(!parser.parse("a").unwrap().is_success());
    let parsed = parser.parse("ac").unwrap();
    assert_eq!(parsed.failure().map(|failure| failure.at), Some(1));

    let parser = Parser::new(sequence([lit("a").unwrap(), end()]).named("only a"));
    assert!(parser.parse("a").unwrap().is_success());
}

#[test]
fn non_ascii_input() {
    let word = token(char_set([('α'..='ω').into(), ('😀'..='😏').into()]).unwrap().one_or_more())
        .named("word");
    let parser = Parser::new(sequence([word, lit("!").unwrap()]).named("shout"));
    let tree = parser.parse("αβ😀γ!").unwrap().into_result().unwrap();
    assert_eq!(tree.as_syntax().unwrap().query_token("word").unwrap().value(), "αβ😀γ");

    let failure = parser.parse("αβ😀x").unwrap().into_result().unwrap_err();
    // Offsets are UTF-16 units: α β 😀(2) = 4.
    assert_eq!(failure.at, 4);
}

// -- Hooks --

#[test]
fn hooks_observe_a_parse() {
    let matched = Rc::new(RefCell::new(Vec::new()));
    let misses = Rc::new(RefCell::new(Vec::new()));
    let matched_sink = Rc::clone(&matched);
    let misses_sink = Rc::clone(&misses);

    let digit = char_set([('0'..='9').into()]).unwrap().named("digit");
    let digit = on(digit, move |node| matched_sink.borrow_mut().push(node.text()));
    let digit = failed(digit, move |id, at| misses_sink.borrow_mut().push((id.to_owned(), at)));
    let parser = Parser::new(digit.one_or_more().named("digits"));

    assert!(parser.parse("123").unwrap().is_success());
    assert_eq!(*matched.borrow(), vec!["1", "2", "3"]);
    // The repetition ends with one failed attempt at the end of input.
    assert_eq!(*misses.borrow(), vec![("digit".to_owned(), 3)]);

    misses.borrow_mut().clear();
    assert!(!parser.parse("4x").unwrap().is_success());
    assert_eq!(*misses.borrow(), vec![("digit".to_owned(), 1)]);
}
