//! Tests for the term tokenizer

use super::*;

fn terms(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.term.as_str()).collect()
}

#[test]
fn test_pair_token_count() {
    let x = "p(f(X),h(Y,f(a)),Y)";
    let y = "p(X,h(Z,Y),f(a))";
    let tokens = tokenize(x, y).unwrap();

    assert_eq!(tokens.len(), 15);
    assert_eq!(tokens[0].term, x);
    assert_eq!(tokens[8].term, y);
}

#[test]
fn test_preorder_per_occurrence() {
    let tokens = tokenize_term("p(Z,h(Z,W),f(W))").unwrap();
    assert_eq!(
        terms(&tokens),
        vec!["p(Z,h(Z,W),f(W))", "Z", "h(Z,W)", "Z", "W", "f(W)", "W"]
    );

    let root = &tokens[0];
    assert_eq!(root.functor, "p");
    assert_eq!(root.kind, TermKind::Functor);
    assert_eq!(root.components, vec!["Z", "h(Z,W)", "f(W)"]);
}

#[test]
fn test_kinds() {
    let tokens = tokenize_term("t(X, a, 42, -3.5, 1e3, \"str\", _, 'Quoted Atom', _Tail)").unwrap();
    let kinds: Vec<TermKind> = tokens[1..].iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TermKind::Variable,
            TermKind::Atom,
            TermKind::Int,
            TermKind::Float,
            TermKind::Float,
            TermKind::String,
            TermKind::Void,
            TermKind::Atom,
            TermKind::Variable,
        ]
    );
}

#[test]
fn test_whitespace_is_dropped() {
    let tokens = tokenize_term("  f( a ,  g(B) )  ").unwrap();
    assert_eq!(terms(&tokens), vec!["f(a,g(B))", "a", "g(B)", "B"]);
}

#[test]
fn test_quoted_atoms_keep_quotes_and_spaces() {
    let tokens = tokenize_term("title('Moby Dick')").unwrap();
    assert_eq!(tokens[0].term, "title('Moby Dick')");
    assert_eq!(tokens[1].term, "'Moby Dick'");
    assert_eq!(tokens[1].functor, "'Moby Dick'");
}

#[test]
fn test_quoted_functor_name() {
    let tokens = tokenize_term("'my f'(a)").unwrap();
    assert_eq!(tokens[0].functor, "'my f'");
    assert_eq!(tokens[0].term, "'my f'(a)");
}

#[test]
fn test_escaped_quotes() {
    let tokens = tokenize_term("f('it''s', \"say \\\"hi\\\"\")").unwrap();
    assert_eq!(tokens[1].term, "'it''s'");
    assert_eq!(tokens[2].term, "\"say \\\"hi\\\"\"");
}

#[test]
fn test_rejects_trailing_input() {
    let err = tokenize_term("f(a) g").unwrap_err();
    assert!(matches!(err, UnitableError::ParseError(_)));
}

#[test]
fn test_rejects_unbalanced() {
    assert!(tokenize_term("f(a").is_err());
    assert!(tokenize_term("f()").is_err());
    assert!(tokenize_term("'open").is_err());
    assert!(tokenize_term("").is_err());
}

fn nest(depth: usize, leaf: &str) -> String {
    format!("{}{}{}", "f(".repeat(depth), leaf, ")".repeat(depth))
}

#[test]
fn test_deep_nesting_does_not_recurse() {
    let depth = 5_000;
    let tokens = tokenize_term(&nest(depth, "X")).unwrap();

    assert_eq!(tokens.len(), depth + 1);
    assert_eq!(tokens[0].components, vec![nest(depth - 1, "X")]);
    assert_eq!(tokens[depth].term, "X");
    assert_eq!(tokens[depth].kind, TermKind::Variable);
}

#[test]
fn test_reports_position_of_error() {
    let err = tokenize_term("f(a, g(b c))").unwrap_err();
    match err {
        UnitableError::ParseError(message) => assert!(message.contains("c))"), "{}", message),
        other => panic!("Expected parse error, got {:?}", other),
    }
}
