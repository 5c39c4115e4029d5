use crate::errors::{Error, Result};
use crate::grammar::{NonTerminal, Production, Symbol};
use crate::parsers::Tree;
use serde::Serialize;

/// A single production as applied while deriving a parse tree
pub type Step = Production;

/// The order in which derivation steps are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    #[value(name = "left", alias = "leftmost")]
    Leftmost,
    #[value(name = "right", alias = "rightmost")]
    Rightmost,
}

/// Returns the leftmost derivation of a parse tree: the productions of its
/// nodes in pre-order, each node before its children and children from left
/// to right
pub fn leftmost(tree: &Tree) -> Vec<Step> {
    tree.productions()
}

/// Returns the leftmost derivation in reverse. This is not a rightmost
/// derivation in the textbook sense, where each step rewrites the rightmost
/// non-terminal; it lists the same steps as `leftmost`, last first.
pub fn rightmost(tree: &Tree) -> Vec<Step> {
    let mut steps = leftmost(tree);
    steps.reverse();
    steps
}

/// Returns the derivation of a parse tree in the given order
pub fn derive(tree: &Tree, order: Order) -> Vec<Step> {
    match order {
        Order::Leftmost => leftmost(tree),
        Order::Rightmost => rightmost(tree),
    }
}

/// Replays a leftmost derivation from the start symbol, returning every
/// sentential form along the way, starting with the start symbol alone. An
/// error is returned if a step does not rewrite the leftmost non-terminal of
/// the current form.
pub fn sentential_forms(start: NonTerminal, steps: &[Step]) -> Result<Vec<Vec<Symbol>>> {
    let mut forms = vec![vec![Symbol::NonTerminal(start)]];

    for (i, step) in steps.iter().enumerate() {
        let mut form = forms[forms.len() - 1].clone();

        match form.iter().position(Symbol::is_non_terminal) {
            Some(pos) if form[pos] == Symbol::NonTerminal(step.head) => {
                form.splice(pos..=pos, step.body.iter().copied());
            }
            found => {
                return Err(Error::StepMismatch {
                    step: i + 1,
                    head: step.head.to_string(),
                    found: found.map_or(String::from("none"), |pos| format!("'{}'", form[pos])),
                });
            }
        }

        forms.push(form);
    }

    Ok(forms)
}

/// Formats a sentential form with its symbols separated by spaces
pub fn format_form(form: &[Symbol]) -> String {
    form.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
