use crate::parsers::Tree;

/// Simplifies a parse tree into an abstract syntax tree.
///
/// A subtree of height 2 or less, a non-terminal directly over its terminal
/// leaves, is kept as it is. Any taller node keeps its label but only its
/// non-terminal children, each simplified in turn, so operators and
/// parentheses disappear everywhere except at the leaves. Operators are
/// dropped rather than turned into labelled operation nodes, and the E, T
/// and F layering of the grammar is preserved.
pub fn simplify(tree: &Tree) -> Tree {
    if tree.height() <= 2 {
        return tree.clone();
    }

    match tree {
        Tree::Node { label, children } => Tree::node(
            *label,
            children
                .iter()
                .filter(|child| child.label().is_some())
                .map(simplify)
                .collect(),
        ),
        Tree::Leaf(_) => tree.clone(),
    }
}
