use super::{NonTerminal, Production, Symbol};
use crate::errors::{Error, Result};

/// Parses grammar text into an ordered list of productions.
///
/// Each non-empty line not starting with '#' is either a production group,
/// `head → body | body ...`, or a continuation of the previous group starting
/// with '|'. Both '→' and '->' are accepted as the production symbol. Within
/// a body, symbols are separated by whitespace; quoted symbols such as `'+'`
/// are single-character terminals and anything else names a non-terminal.
pub fn parse(input: &str) -> Result<Vec<Production>> {
    let mut productions: Vec<Production> = Vec::new();
    let mut head: Option<NonTerminal> = None;

    for (n, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let bodies = if let Some(rest) = line.strip_prefix('|') {
            // Continuation lines extend the most recent production group
            if head.is_none() {
                return Err(Error::Grammar(format!(
                    "line {}: alternative without a production head",
                    n + 1
                )));
            }
            rest
        } else {
            let Some((h, rest)) = split_production(line) else {
                return Err(Error::Grammar(format!(
                    "line {}: expected production symbol",
                    n + 1
                )));
            };
            head = Some(h.trim().parse()?);
            rest
        };

        let Some(head) = head else {
            continue;
        };

        for body in split_alternatives(bodies) {
            productions.push(Production {
                head,
                body: parse_body(&body, n + 1)?,
            });
        }
    }

    if productions.is_empty() {
        return Err(Error::Grammar(String::from("no productions found")));
    }

    Ok(productions)
}

/// Splits a line into its head and the remainder after the production symbol
fn split_production(line: &str) -> Option<(&str, &str)> {
    line.split_once('→').or_else(|| line.split_once("->"))
}

/// Splits the bodies of a production group on the alternative token. Only a
/// bare '|' word separates alternatives, so a quoted '|' remains a terminal.
fn split_alternatives(bodies: &str) -> Vec<Vec<&str>> {
    let mut alternatives: Vec<Vec<&str>> = vec![Vec::new()];

    for word in bodies.split_whitespace() {
        if word == "|" {
            alternatives.push(Vec::new());
        } else if let Some(last) = alternatives.last_mut() {
            last.push(word);
        }
    }

    alternatives
}

/// Parses the words of a single production body into grammar symbols
fn parse_body(words: &[&str], line: usize) -> Result<Vec<Symbol>> {
    if words.is_empty() {
        return Err(Error::Grammar(format!("line {}: empty production body", line)));
    }

    words
        .iter()
        .map(|word| {
            if word.starts_with('\'') {
                let c: Vec<char> = word.chars().collect();
                if c.len() != 3 || c[2] != '\'' {
                    return Err(Error::Grammar(format!(
                        "line {}: invalid terminal {}",
                        line, word
                    )));
                }
                Ok(Symbol::Terminal(c[1]))
            } else {
                Ok(Symbol::NonTerminal(word.parse()?))
            }
        })
        .collect()
}
