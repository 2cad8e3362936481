//! Character cursor over a fully buffered source
//!
//! Tracks the absolute offset together with the 1-based line and column of
//! the next unread character.

use crate::error::SourceLocation;

/// Sentinel returned when looking past the end of the input
pub const EOF_CHAR: char = '\0';

pub struct Cursor {
    source: Vec<char>,
    offset: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor, or `EOF_CHAR` at end of input
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// The character `k` positions ahead of the cursor
    pub fn peek(&self, k: usize) -> char {
        self.source.get(self.offset + k).copied().unwrap_or(EOF_CHAR)
    }

    /// Consume one character. A newline moves to column 1 of the next line.
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        if self.current() == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += 1;
    }

    /// Consume characters while `predicate` holds
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current()) {
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Position of the next unread character
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Collect the characters in `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }
}
