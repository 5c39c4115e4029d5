use exprderive::ast::simplify;
use exprderive::derivation::{self, Order};
use exprderive::grammar::{Grammar, Symbol};
use exprderive::lexer::tokenize;
use exprderive::parsers::{Parser, Tree};
use exprderive::process;
use proptest::prelude::*;
mod common;

/// Returns true if no node taller than 2 keeps a terminal child
fn operators_elided(tree: &Tree) -> bool {
    if tree.height() <= 2 {
        return true;
    }

    tree.children()
        .iter()
        .all(|c| c.label().is_some() && operators_elided(c))
}

proptest! {
    #[test]
    fn prop_leftmost_derives_input(input in common::expression()) {
        let tree = common::first_tree(&input).expect("no parse tree");
        prop_assert_eq!(tree.frontier(), input.clone());

        let forms = derivation::sentential_forms(
            Grammar::arithmetic().start(),
            &derivation::leftmost(&tree),
        )
        .expect("not a leftmost derivation");

        let last: String = forms
            .last()
            .expect("no forms")
            .iter()
            .map(|s| match s {
                Symbol::Terminal(c) => Ok(*c),
                Symbol::NonTerminal(nt) => Err(nt.to_string()),
            })
            .collect::<Result<String, String>>()
            .expect("non-terminal left in final form");
        prop_assert_eq!(last, input);
    }

    #[test]
    fn prop_rightmost_is_reversed_leftmost(input in common::expression()) {
        let tree = common::first_tree(&input).expect("no parse tree");

        let mut reversed = derivation::leftmost(&tree);
        reversed.reverse();
        prop_assert_eq!(derivation::rightmost(&tree), reversed);
    }

    #[test]
    fn prop_simplify_idempotent(input in common::expression()) {
        let tree = common::first_tree(&input).expect("no parse tree");
        let ast = simplify(&tree);

        prop_assert_eq!(simplify(&ast), ast.clone());
        prop_assert!(operators_elided(&ast));
        prop_assert_eq!(ast.label(), tree.label());
    }

    #[test]
    fn prop_unambiguous(input in common::expression()) {
        let forest = Parser::new(Grammar::arithmetic())
            .parse(&tokenize(&input))
            .expect("tokens not covered");

        prop_assert!(forest.accepts());
        prop_assert_eq!(forest.trees().take(2).count(), 1);
    }

    #[test]
    fn prop_whitespace_ignored(input in common::expression()) {
        let spaced: String = input.chars().flat_map(|c| [' ', c]).collect();

        let plain = process(&input, Order::Leftmost).expect("no derivation");
        let spaced = process(&spaced, Order::Leftmost).expect("no derivation");
        prop_assert_eq!(plain, spaced);
    }

    #[test]
    fn prop_unbalanced_rejected(input in common::expression()) {
        let unbalanced = format!("({}", input);
        prop_assert!(process(&unbalanced, Order::Leftmost).is_err());
    }
}
