use crate::grammar::{NonTerminal, Production, Symbol};
use serde::Serialize;

/// A parse tree. Internal nodes are labelled with a non-terminal and own
/// their children in order; leaves hold a single terminal character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tree {
    Node {
        label: NonTerminal,
        children: Vec<Tree>,
    },
    Leaf(char),
}

impl Tree {
    /// Creates an internal node with the given label and children
    pub fn node(label: NonTerminal, children: Vec<Tree>) -> Tree {
        Tree::Node { label, children }
    }

    /// Returns the label of an internal node, or None for a leaf
    pub fn label(&self) -> Option<NonTerminal> {
        match self {
            Tree::Node { label, .. } => Some(*label),
            Tree::Leaf(_) => None,
        }
    }

    /// Returns the children of an internal node. Leaves have none.
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node { children, .. } => children,
            Tree::Leaf(_) => &[],
        }
    }

    /// Returns the height of the tree. A leaf has height 1, so a node whose
    /// children are all leaves has height 2.
    pub fn height(&self) -> usize {
        match self {
            Tree::Node { children, .. } => {
                1 + children.iter().map(Tree::height).max().unwrap_or(0)
            }
            Tree::Leaf(_) => 1,
        }
    }

    /// Returns the productions used by each internal node, in pre-order: a
    /// node's production comes before those of its children, and children
    /// are visited left to right.
    pub fn productions(&self) -> Vec<Production> {
        let mut output = Vec::new();

        fn traverse(tree: &Tree, out: &mut Vec<Production>) {
            let Tree::Node { label, children } = tree else {
                return;
            };

            out.push(Production {
                head: *label,
                body: children
                    .iter()
                    .map(|child| match child {
                        Tree::Node { label, .. } => Symbol::NonTerminal(*label),
                        Tree::Leaf(c) => Symbol::Terminal(*c),
                    })
                    .collect(),
            });

            for child in children {
                traverse(child, out);
            }
        }

        traverse(self, &mut output);
        output
    }

    /// Returns a simple, one-line string representation of the parse tree
    pub fn visualize(&self) -> String {
        let mut output = String::new();

        // Define this as a regular function rather than a closure, since we
        // need to call it recursively
        fn traverse(tree: &Tree, s: &mut String) {
            match tree {
                Tree::Node { label, children } => {
                    s.push_str(&format!("{}→[", label));
                    for (i, child) in children.iter().enumerate() {
                        if i > 0 {
                            s.push(' ');
                        }
                        traverse(child, s);
                    }
                    s.push(']');
                }
                Tree::Leaf(c) => {
                    s.push_str(&crate::utils::quote_terminal(*c));
                }
            }
        }

        traverse(self, &mut output);
        output
    }

    /// Returns the frontier, or yield, of the tree: the leaves concatenated
    /// in left-to-right order, which reconstructs the parsed tokens
    pub fn frontier(&self) -> String {
        let mut output = String::new();

        fn traverse(tree: &Tree, s: &mut String) {
            match tree {
                Tree::Node { children, .. } => {
                    for child in children {
                        traverse(child, s);
                    }
                }
                Tree::Leaf(c) => s.push(*c),
            }
        }

        traverse(self, &mut output);
        output
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use NonTerminal::{E, F, T};

    /// Builds the tree for "a+b" by hand
    fn sum_tree() -> Tree {
        let factor = |c| Tree::node(T, vec![Tree::node(F, vec![Tree::Leaf(c)])]);
        Tree::node(
            E,
            vec![
                Tree::node(E, vec![factor('a')]),
                Tree::Leaf('+'),
                factor('b'),
            ],
        )
    }

    #[test]
    fn test_frontier() {
        assert_eq!(sum_tree().frontier(), "a+b");
        assert_eq!(Tree::Leaf('x').frontier(), "x");
    }

    #[test]
    fn test_height() {
        assert_eq!(Tree::Leaf('a').height(), 1);
        assert_eq!(Tree::node(F, vec![Tree::Leaf('a')]).height(), 2);
        assert_eq!(sum_tree().height(), 5);
    }

    #[test]
    fn test_visualize() {
        assert_eq!(
            sum_tree().visualize(),
            "E→[E→[T→[F→['a']]] '+' T→[F→['b']]]"
        );
    }

    #[test]
    fn test_productions() {
        let productions: Vec<String> = sum_tree()
            .productions()
            .iter()
            .map(|p| p.to_string())
            .collect();

        assert_eq!(
            productions,
            vec![
                "E → E '+' T",
                "E → T",
                "T → F",
                "F → 'a'",
                "T → F",
                "F → 'b'",
            ]
        );
    }
}
