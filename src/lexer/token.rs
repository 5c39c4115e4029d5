use crate::position::Position;
use serde::Serialize;
use std::fmt;

/// The class of characters a token was recognized from
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Digits,
    Letters,
    Operator,
    Parenthesis,
}

/// A lexical token of an arithmetic expression, with its position in the
/// input
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    /// Returns the single terminal character of the token, or None if the
    /// token text is longer than one character
    pub fn terminal(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
