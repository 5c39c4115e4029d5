mod parser;
mod symbol;

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

pub use symbol::{NonTerminal, Symbol};

/// Grammar text for arithmetic expressions over single letters and digits
static GRAMMAR_TEXT: &str = "
# Addition and subtraction are left-associative and bind loosest
E → E '+' T | E '-' T | T

# Multiplication and division are left-associative and bind tighter
T → T '*' F | T '/' F | F

# Factors are atomic
F → '(' E ')'
  | 'a' | 'b' | 'c' | 'd' | 'e' | 'f' | 'g' | 'h' | 'i' | 'j' | 'k' | 'l' | 'm'
  | 'n' | 'o' | 'p' | 'q' | 'r' | 's' | 't' | 'u' | 'v' | 'w' | 'x' | 'y' | 'z'
  | '0' | '1' | '2' | '3' | '4' | '5' | '6' | '7' | '8' | '9'
";

static ARITHMETIC: Lazy<Grammar> =
    Lazy::new(|| Grammar::new(GRAMMAR_TEXT).expect("bad built-in grammar"));

/// A context-free grammar production
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Production {
    pub head: NonTerminal,
    pub body: Vec<Symbol>,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} →", self.head)?;
        for s in &self.body {
            write!(f, " {}", s)?;
        }
        Ok(())
    }
}

/// A context-free grammar. Productions keep the order in which they were
/// declared, which is also the order in which the parser tries alternatives.
#[derive(Debug)]
pub struct Grammar {
    productions: Vec<Production>,
    nt_productions: HashMap<NonTerminal, Vec<usize>>,
    terminals: BTreeSet<char>,
}

impl Grammar {
    /// Creates a context-free grammar from a string representation
    pub fn new(input: &str) -> Result<Grammar> {
        let productions = parser::parse(input)?;

        let mut nt_productions: HashMap<NonTerminal, Vec<usize>> = HashMap::new();
        let mut terminals = BTreeSet::new();

        for (i, p) in productions.iter().enumerate() {
            nt_productions.entry(p.head).or_default().push(i);
            for s in &p.body {
                if let Symbol::Terminal(c) = s {
                    terminals.insert(*c);
                }
            }
        }

        // Every non-terminal used in a body needs at least one production
        for p in &productions {
            for s in &p.body {
                if let Symbol::NonTerminal(nt) = s {
                    if !nt_productions.contains_key(nt) {
                        return Err(Error::Grammar(format!(
                            "no productions found for non-terminal '{}'",
                            nt
                        )));
                    }
                }
            }
        }

        if let Some(nt) = unit_cycle(&productions) {
            return Err(Error::Grammar(format!(
                "non-terminal '{}' derives itself through unit productions",
                nt
            )));
        }

        log::debug!(
            "loaded grammar with {} productions and {} terminals",
            productions.len(),
            terminals.len()
        );

        Ok(Grammar {
            productions,
            nt_productions,
            terminals,
        })
    }

    /// Returns the fixed, process-wide arithmetic expression grammar
    pub fn arithmetic() -> &'static Grammar {
        &ARITHMETIC
    }

    /// Returns true if the given character is a terminal of the grammar
    pub fn covers(&self, c: char) -> bool {
        self.terminals.contains(&c)
    }

    /// Returns the number of productions in the grammar
    pub fn num_productions(&self) -> usize {
        self.productions.len()
    }

    /// Returns the production with the given ID
    pub fn production(&self, i: usize) -> &Production {
        &self.productions[i]
    }

    /// Returns the IDs of all productions for the given non-terminal, in
    /// declaration order
    pub fn productions_for_non_terminal(&self, nt: NonTerminal) -> &[usize] {
        self.nt_productions
            .get(&nt)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the start symbol, which is the head of the first production
    pub fn start(&self) -> NonTerminal {
        self.productions[0].head
    }

    /// Returns the terminals of the grammar in sorted order
    pub fn terminals(&self) -> impl Iterator<Item = char> + '_ {
        self.terminals.iter().copied()
    }
}

/// Returns a non-terminal which can derive itself using only productions
/// whose body is a single non-terminal, if there is one. Such a grammar has
/// infinitely many parse trees for some inputs.
fn unit_cycle(productions: &[Production]) -> Option<NonTerminal> {
    let unit = |from: NonTerminal| {
        productions
            .iter()
            .filter(move |p| p.head == from && p.body.len() == 1)
            .filter_map(|p| match p.body[0] {
                Symbol::NonTerminal(nt) => Some(nt),
                Symbol::Terminal(_) => None,
            })
    };

    for p in productions {
        let mut visited: BTreeSet<NonTerminal> = BTreeSet::new();
        let mut stack: Vec<NonTerminal> = unit(p.head).collect();

        while let Some(nt) = stack.pop() {
            if nt == p.head {
                return Some(nt);
            }
            if visited.insert(nt) {
                stack.extend(unit(nt));
            }
        }
    }

    None
}
