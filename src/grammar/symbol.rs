use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// A non-terminal of the arithmetic expression grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NonTerminal {
    /// Expression: sums and differences of terms
    E,
    /// Term: products and quotients of factors
    T,
    /// Factor: a parenthesized expression, a letter or a digit
    F,
}

impl NonTerminal {
    /// Returns the name of the non-terminal as written in grammar text
    pub fn name(&self) -> &'static str {
        match self {
            NonTerminal::E => "E",
            NonTerminal::T => "T",
            NonTerminal::F => "F",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NonTerminal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(NonTerminal::E),
            "T" => Ok(NonTerminal::T),
            "F" => Ok(NonTerminal::F),
            _ => Err(Error::Grammar(format!("unknown non-terminal '{}'", s))),
        }
    }
}

/// A context-free grammar symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Symbol {
    NonTerminal(NonTerminal),
    Terminal(char),
}

impl Symbol {
    /// Returns true if the symbol is a non-terminal
    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }
}

impl fmt::Display for Symbol {
    /// Formats non-terminals by name and terminals quoted
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::NonTerminal(nt) => write!(f, "{}", nt),
            Symbol::Terminal(c) => write!(f, "{}", crate::utils::quote_terminal(*c)),
        }
    }
}
