#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::{choose, lit, sequence};
use descent_text::encode;
use pretty_assertions::assert_eq;

fn run(grammar: &Grammar, input: &str) -> (Outcome, usize) {
    let units = encode(input);
    let mut cursor = Cursor::new(&units);
    let mut ctx = Context::new();
    let outcome = grammar.run(&mut ctx, &mut cursor).unwrap();
    (outcome, cursor.first())
}

#[test]
fn on_sees_each_match() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let word = on(lit("ab").unwrap(), move |node| sink.borrow_mut().push(node.text()));
    let (outcome, at) = run(&word.one_or_more(), "ababab");
    assert!(outcome.is_success());
    assert_eq!(at, 6);
    assert_eq!(*seen.borrow(), vec!["ab", "ab", "ab"]);
}

#[test]
fn on_is_silent_on_failure_and_empty() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let hooked = on(lit("x").unwrap().maybe(), move |_| *counter.borrow_mut() += 1);
    let (outcome, _) = run(&hooked, "y");
    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn failed_reports_id_and_position() {
    let failures = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&failures);
    let digit = failed(lit("1").unwrap(), move |id, at| {
        sink.borrow_mut().push((id.to_owned(), at));
    });
    let grammar = sequence([lit("a").unwrap(), digit]);
    let (outcome, _) = run(&grammar, "ab");
    assert!(outcome.is_failed());
    assert_eq!(*failures.borrow(), vec![("1".to_owned(), 1)]);
}

#[test]
fn failed_is_silent_on_success() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let hooked = failed(lit("a").unwrap(), move |_, _| *counter.borrow_mut() += 1);
    let (outcome, _) = run(&hooked, "a");
    assert!(outcome.is_success());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn hooks_preserve_identity() {
    let base = choose([lit("a").unwrap(), lit("b").unwrap()]).named("ab");
    let hooked = traced(on(base.clone(), |_| {}));
    assert_eq!(hooked.id(), "ab");
    assert_eq!(hooked.graph().tag(), base.graph().tag());
    assert_eq!(hooked.could_return_empty(), base.could_return_empty());
    assert_eq!(run(&hooked, "b"), run(&base, "b"));
}

#[test]
fn hooked_grammar_still_combines() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let hooked = on(lit("z").unwrap(), move |_| *counter.borrow_mut() += 1);
    let grammar = hooked.between(2, 3).unwrap();
    let (outcome, at) = run(&grammar, "zzzz");
    assert!(outcome.is_success());
    assert_eq!(at, 3);
    assert_eq!(*calls.borrow(), 3);
}

#[test]
fn named_keeps_hook_attached() {
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let renamed = on(lit("q").unwrap(), move |_| *counter.borrow_mut() += 1).named("quote");
    assert_eq!(renamed.id(), "quote");
    let (outcome, _) = run(&renamed, "q");
    assert_eq!(outcome.node().map(descent_tree::Node::id), Some("quote"));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn traced_does_not_change_outcome() {
    let grammar = sequence([lit("a").unwrap(), lit("b").unwrap()]);
    assert_eq!(run(&traced(grammar.clone()), "ab"), run(&grammar, "ab"));
    assert_eq!(run(&traced(grammar.clone()), "ax"), run(&grammar, "ax"));
}
