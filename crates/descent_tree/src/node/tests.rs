use super::*;
use pretty_assertions::assert_eq;

fn word(value: &str) -> Node {
    Token::new("word", value).into()
}

#[test]
fn token_accessors() {
    let token = Token::new("digit", "7");
    assert_eq!(token.id(), "digit");
    assert_eq!(token.value(), "7");
    assert_eq!(token.into_value(), "7");
}

#[test]
fn node_kind_and_id() {
    let leaf = word("cat");
    assert_eq!(leaf.kind(), NodeKind::Token);
    assert_eq!(leaf.id(), "word");
    assert!(leaf.is_token());

    let branch = Node::from(Syntax::new("list", [leaf]));
    assert_eq!(branch.kind(), NodeKind::Syntax);
    assert!(branch.is_syntax());
    assert!(branch.as_token().is_none());
    assert_eq!(branch.as_syntax().map(Syntax::len), Some(1));
}

#[test]
fn text_concatenates_leaves() {
    let tree = Node::from(Syntax::new(
        "pair",
        [
            word("a"),
            Syntax::new("inner", [word("b"), word("c")]).into(),
        ],
    ));
    assert_eq!(tree.text(), "abc");
}

#[test]
fn expect_token_checks_kind_and_id() {
    let leaf = word("cat");
    assert!(leaf.expect_token(None).is_ok());
    assert!(leaf.expect_token(Some("word")).is_ok());
    assert_eq!(
        leaf.expect_token(Some("number")),
        Err(ShapeError::WrongId {
            expected: "number".to_owned(),
            found: "word".to_owned(),
        })
    );
    assert_eq!(
        leaf.expect_syntax(None),
        Err(ShapeError::WrongKind {
            expected: NodeKind::Syntax,
            found: NodeKind::Token,
        })
    );
}

#[test]
fn expect_syntax_checks_kind_and_id() {
    let branch = Node::from(Syntax::new("list", []));
    assert!(branch.expect_syntax(Some("list")).is_ok());
    assert!(branch.expect_token(None).is_err());
}

#[test]
fn token_node_has_no_children_to_query() {
    assert!(word("cat").query("word").is_none());
}

#[test]
fn display_renders_indented_tree() {
    let tree = Node::from(Syntax::new(
        "pair",
        [word("a"), Syntax::new("inner", [Token::new("", "b").into()]).into()],
    ));
    assert_eq!(
        tree.to_string(),
        "pair\n  word \"a\"\n  inner\n    <anonymous> \"b\"\n"
    );
}

#[test]
fn shape_error_messages() {
    let err = ShapeError::WrongKind {
        expected: NodeKind::Token,
        found: NodeKind::Syntax,
    };
    assert_eq!(err.to_string(), "expected a token node, found a syntax node");
}
