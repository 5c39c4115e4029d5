use crate::parsers::Tree;
use crate::utils::quote_terminal;

/// Draws a tree one node per line, using box-drawing characters to connect
/// each node to its parent
pub fn render(tree: &Tree, indent: usize) -> String {
    let mut output = String::new();
    let mut lasts: Vec<bool> = Vec::new();

    fn traverse(tree: &Tree, lasts: &mut Vec<bool>, indent: usize, out: &mut String) {
        match tree {
            Tree::Node { label, children } => {
                push_node(&label.to_string(), lasts, indent, out);

                for (i, child) in children.iter().enumerate() {
                    lasts.push(i == children.len() - 1);
                    traverse(child, lasts, indent, out);
                    lasts.pop();
                }
            }
            Tree::Leaf(c) => {
                push_node(&quote_terminal(*c), lasts, indent, out);
            }
        }
    }

    traverse(tree, &mut lasts, indent, &mut output);
    output
}

/// Appends a node line with the appropriate prefix
fn push_node(name: &str, lasts: &[bool], indent: usize, out: &mut String) {
    if let Some((last, parents)) = lasts.split_last() {
        out.push_str(&format!(
            "{}{:─<w$}{}\n",
            format_prefix(parents, indent),
            list_item_symbol(*last),
            name,
            w = indent,
        ));
    } else {
        out.push_str(name);
        out.push('\n');
    }
}

/// Returns the prefix of a tree output line. For each ancestor level, a
/// vertical line is drawn if that ancestor still has children to come,
/// otherwise the column is left blank.
fn format_prefix(lasts: &[bool], indent: usize) -> String {
    let mut s = String::new();
    for &n in lasts {
        s.push_str(&format!("{:w$}", if n { "" } else { "│" }, w = indent));
    }
    s
}

/// Returns the appropriate character for a child of a node, depending on
/// whether the child is the last one
fn list_item_symbol(last: bool) -> char {
    if last {
        '└'
    } else {
        '├'
    }
}
