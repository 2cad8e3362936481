//! Scanner implementation for the IBTAC language
//!
//! Converts source text into tokens one at a time. The scanner is a
//! single-pass iterator: it yields every token in source order, then one
//! `Eof` token, and stops for good at the first error.

use std::iter::FusedIterator;

use tracing::trace;

use super::cursor::Cursor;
use super::token::{is_keyword, Token, TokenKind};
use crate::error::{LexError, LexErrorKind, LexResult, SourceLocation};

/// Literal digits that open a student-prefixed identifier
const STUDENT_PREFIX: [char; 3] = ['1', '3', '9'];

/// Lexer for IBTAC source code
pub struct Scanner {
    cursor: Cursor,
    finished: bool,
}

impl Scanner {
    /// Create a new scanner that owns a copy of `source`
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Scan the remaining input eagerly.
    ///
    /// On success the last token is always `Eof`.
    pub fn tokenize(self) -> LexResult<Vec<Token>> {
        self.collect()
    }

    /// Scan a single token
    fn scan_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments()?;

        let start = self.cursor.offset();
        let location = self.cursor.location();

        if self.cursor.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, "", location));
        }

        match self.cursor.current() {
            // String literals
            '$' => self.scan_string(start, location),

            // Student-prefixed identifiers take priority over numbers
            '1' if self.at_student_prefix() => self.scan_student_prefixed(start, location),

            // Number literals, including the leading-dot form
            c if c.is_ascii_digit() => self.scan_number(start, location),
            '.' if self.cursor.peek(1).is_ascii_digit() => self.scan_number(start, location),

            // Identifiers and keywords
            c if is_identifier_start(c) => self.scan_identifier(start, location),

            // Operators, punctuation, or an invalid symbol
            _ => self.scan_operator(location),
        }
    }

    /// Skip blanks, `//` line comments and `/* */` block comments
    fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        while !self.cursor.is_at_end() {
            match (self.cursor.current(), self.cursor.peek(1)) {
                (' ' | '\t' | '\r' | '\n', _) => {
                    self.cursor.advance();
                }
                ('/', '/') => self.cursor.eat_while(|c| c != '\n'),
                ('/', '*') => self.skip_block_comment()?,
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip a block comment. Block comments never nest.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        let opening = self.cursor.location();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::new(LexErrorKind::UnterminatedComment, opening));
            }

            match (self.cursor.current(), self.cursor.peek(1)) {
                ('/', '*') => {
                    return Err(LexError::new(
                        LexErrorKind::NestedComment,
                        self.cursor.location(),
                    ));
                }
                ('*', '/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return Ok(());
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Scan a `$`-delimited string. Newlines are kept verbatim.
    fn scan_string(&mut self, start: usize, location: SourceLocation) -> LexResult<Token> {
        // Opening '$'
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '$');

        if self.cursor.is_at_end() {
            return Err(LexError::new(LexErrorKind::UnterminatedString, location));
        }

        let value = self.cursor.slice(start + 1, self.cursor.offset());
        // Closing '$'
        self.cursor.advance();

        Ok(Token::new(TokenKind::String, value, location))
    }

    /// The next three characters are exactly `139`
    fn at_student_prefix(&self) -> bool {
        STUDENT_PREFIX
            .iter()
            .enumerate()
            .all(|(i, &digit)| self.cursor.peek(i) == digit)
    }

    /// Scan a run starting with `139`.
    ///
    /// With at least one identifier character after the prefix the whole run
    /// is an identifier, never a keyword. Without one, the token is exactly
    /// `NUMBER "139"` and no fraction or exponent is read.
    fn scan_student_prefixed(&mut self, start: usize, location: SourceLocation) -> LexResult<Token> {
        for _ in STUDENT_PREFIX {
            self.cursor.advance();
        }

        if !is_identifier_continue(self.cursor.current()) {
            let lexeme = self.cursor.slice(start, self.cursor.offset());
            return Ok(Token::new(TokenKind::Number, lexeme, location));
        }
        self.cursor.eat_while(is_identifier_continue);

        let lexeme = self.cursor.slice(start, self.cursor.offset());
        Ok(Token::new(TokenKind::Identifier, lexeme, location))
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self, start: usize, location: SourceLocation) -> LexResult<Token> {
        self.cursor.advance();
        self.cursor.eat_while(is_identifier_continue);

        let lexeme = self.cursor.slice(start, self.cursor.offset());
        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Ok(Token::new(kind, lexeme, location))
    }

    /// Scan a number literal.
    ///
    /// `digit+ ('.' digit*)? exponent?` or `'.' digit+ exponent?`, where the
    /// exponent is `[eE] [+-]? digit+`.
    fn scan_number(&mut self, start: usize, location: SourceLocation) -> LexResult<Token> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current() == '.' {
            let has_integer_part = self.cursor.offset() > start;
            if has_integer_part || self.cursor.peek(1).is_ascii_digit() {
                self.cursor.advance();
                self.cursor.eat_while(|c| c.is_ascii_digit());
            }
        }

        if matches!(self.cursor.current(), 'e' | 'E') {
            let marker = self.cursor.location();
            self.cursor.advance();
            if matches!(self.cursor.current(), '+' | '-') {
                self.cursor.advance();
            }
            if !self.cursor.current().is_ascii_digit() {
                return Err(LexError::new(LexErrorKind::MalformedNumber, marker));
            }
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let lexeme = self.cursor.slice(start, self.cursor.offset());
        Ok(Token::new(TokenKind::Number, lexeme, location))
    }

    /// Scan an operator or punctuation mark, two-character forms first
    fn scan_operator(&mut self, location: SourceLocation) -> LexResult<Token> {
        let first = self.cursor.current();
        let second = self.cursor.peek(1);

        let pair: String = [first, second].iter().collect();
        if let Some(kind) = TokenKind::from_operator(&pair) {
            self.cursor.advance();
            self.cursor.advance();
            return Ok(Token::new(kind, pair, location));
        }

        let single = first.to_string();
        match TokenKind::from_operator(&single) {
            Some(kind) => {
                self.cursor.advance();
                Ok(Token::new(kind, single, location))
            }
            None => Err(LexError::new(LexErrorKind::InvalidSymbol(first), location)),
        }
    }
}

impl Iterator for Scanner {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.scan_token();
        match &result {
            Ok(token) => {
                trace!(kind = %token.kind, lexeme = ?token.lexeme, line = token.line, column = token.column, "token");
                self.finished = token.kind == TokenKind::Eof;
            }
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}

impl FusedIterator for Scanner {}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
