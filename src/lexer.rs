mod token;

use crate::position::Position;
use once_cell::sync::Lazy;
use regex::Regex;

pub use token::{Token, TokenKind};

/// Runs of digits, runs of lowercase letters, and single operator or
/// parenthesis characters, in that order of priority
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+|[a-z]+|[+\-*/()]").expect("bad token pattern"));

/// Splits an arithmetic expression into tokens. Characters which do not
/// belong to any token class, including whitespace, are silently discarded,
/// so this never fails, though the result may be empty.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut position = Position::new();
    let mut offset = 0;

    let tokens: Vec<Token> = TOKEN_PATTERN
        .find_iter(input)
        .map(|m| {
            position.skip(&input[offset..m.start()]);
            offset = m.start();

            let text = m.as_str();
            Token {
                kind: classify(text),
                text: text.to_string(),
                position,
            }
        })
        .collect();

    log::debug!("tokenized {:?} into {} tokens", input, tokens.len());
    log::trace!("tokens: {:?}", tokens);

    tokens
}

/// Splits every multi-character run of digits or letters into one token per
/// character, so each token is a single terminal of the grammar
pub fn split_runs(tokens: Vec<Token>) -> Vec<Token> {
    let mut split: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.terminal().is_some() {
            split.push(token);
            continue;
        }

        let mut position = token.position;
        for c in token.text.chars() {
            split.push(Token {
                kind: token.kind,
                text: c.to_string(),
                position,
            });
            position.advance(false);
        }
    }

    split
}

/// Returns the token class of a matched run. The run is never empty.
fn classify(text: &str) -> TokenKind {
    match text.chars().next() {
        Some('(' | ')') => TokenKind::Parenthesis,
        Some('+' | '-' | '*' | '/') => TokenKind::Operator,
        Some(c) if c.is_ascii_lowercase() => TokenKind::Letters,
        _ => TokenKind::Digits,
    }
}
