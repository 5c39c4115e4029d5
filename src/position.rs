use serde::Serialize;
use std::fmt;

/// A line number within an input string, and the column of a character
/// within that line. Both begin at 1.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Returns the position of the first character of an input
    pub fn new() -> Position {
        Position { line: 1, column: 1 }
    }

    /// Advances the position past every character of text. Columns count
    /// characters, not bytes.
    pub fn skip(&mut self, text: &str) {
        for c in text.chars() {
            self.advance(c == '\n');
        }
    }

    /// Advances the position by one character, moving to the start of the
    /// next line if new_line is true
    pub fn advance(&mut self, new_line: bool) {
        if new_line {
            self.column = 1;
            self.line += 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
