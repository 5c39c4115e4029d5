use exprderive::grammar::Grammar;
use exprderive::lexer::tokenize;
use exprderive::parsers::{Parser, Tree};
use proptest::prelude::*;

#[allow(dead_code)]
/// Helper function to parse an expression and return its first parse tree
pub fn first_tree(input: &str) -> Option<Tree> {
    let forest = Parser::new(Grammar::arithmetic())
        .parse(&tokenize(input))
        .ok()?;
    forest.trees().next()
}

#[allow(dead_code)]
/// Strategy generating well-formed expressions of single letters and digits,
/// with balanced parentheses and no whitespace
pub fn expression() -> impl Strategy<Value = String> {
    let atoms: Vec<char> = ('a'..='z').chain('0'..='9').collect();
    let leaf = prop::sample::select(atoms).prop_map(|c| c.to_string());

    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!['+', '-', '*', '/']),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("{}{}{}", l, op, r)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}
