//! Error handling and diagnostics for the IBTAC lexer
//!
//! Every lexical error is fatal to the scan that raised it. The error carries
//! the kind of failure and the position of the character or construct that
//! triggered it.

use std::fmt;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for scanning operations
pub type LexResult<T> = Result<T, LexError>;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The closed set of lexical failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A `$` string reached end of input without its closing `$`
    #[error("unterminated string")]
    UnterminatedString,

    /// A `/*` comment reached end of input without `*/`
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// `/*` appeared inside an open block comment
    #[error("nested block comments are not allowed")]
    NestedComment,

    /// An exponent marker was not followed by at least one digit
    #[error("malformed number: exponent requires at least one digit")]
    MalformedNumber,

    /// A character that starts no token
    #[error("invalid symbol {0:?}")]
    InvalidSymbol(char),
}

impl LexErrorKind {
    /// Name of the error in the lexer's error taxonomy
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnterminatedString => "UnterminatedStringError",
            Self::UnterminatedComment => "UnterminatedCommentError",
            Self::NestedComment => "NestedCommentError",
            Self::MalformedNumber => "MalformedNumberError",
            Self::InvalidSymbol(_) => "InvalidSymbolError",
        }
    }
}

/// A fatal scanning error pinned to a source position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {kind} at {location}", .kind.name())]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

impl LexError {
    /// Create a new lexer error
    pub fn new(kind: LexErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    /// Get the error kind as a string
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}
