//! Token definitions for the IBTAC language
//!
//! This module defines all token kinds produced by lexical analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SourceLocation;

/// Reserved words. Recognition is an exact, case-sensitive match.
pub const KEYWORDS: [&str; 5] = ["if", "else", "while", "return", "func"];

/// Check whether `s` is exactly one of the reserved words
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// A token in the IBTAC language
///
/// Serialized field order is `type`, `lexeme`, `line`, `column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Matched source text; string tokens exclude their `$` delimiters.
    pub lexeme: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column of the first character (1-based)
    pub column: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: location.line,
            column: location.column,
        }
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}:{}", self.kind, self.lexeme, self.line, self.column)
    }
}

/// Token kinds in the IBTAC language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Words and literals
    Identifier,
    Keyword,
    Number,
    String,

    // Arithmetic
    OpPlus,  // +
    OpMinus, // -
    OpStar,  // *
    OpSlash, // /

    // Comparison
    OpEq, // ==
    OpNe, // != or <>
    OpLt, // <
    OpGt, // >
    OpLe, // <=
    OpGe, // >=

    OpAssign, // =

    // Punctuation
    #[serde(rename = "LPAREN")]
    LParen, // (
    #[serde(rename = "RPAREN")]
    RParen, // )
    #[serde(rename = "LBRACE")]
    LBrace, // {
    #[serde(rename = "RBRACE")]
    RBrace, // }
    #[serde(rename = "LBRACKET")]
    LBracket, // [
    #[serde(rename = "RBRACKET")]
    RBracket, // ]
    Comma,     // ,
    Semicolon, // ;

    Eof,
}

impl TokenKind {
    /// Map an operator or punctuation spelling to its kind.
    ///
    /// Both `!=` and `<>` spell not-equal.
    pub fn from_operator(s: &str) -> Option<Self> {
        match s {
            "==" => Some(Self::OpEq),
            "!=" | "<>" => Some(Self::OpNe),
            "<=" => Some(Self::OpLe),
            ">=" => Some(Self::OpGe),
            "+" => Some(Self::OpPlus),
            "-" => Some(Self::OpMinus),
            "*" => Some(Self::OpStar),
            "/" => Some(Self::OpSlash),
            "<" => Some(Self::OpLt),
            ">" => Some(Self::OpGt),
            "=" => Some(Self::OpAssign),
            "(" => Some(Self::LParen),
            ")" => Some(Self::RParen),
            "{" => Some(Self::LBrace),
            "}" => Some(Self::RBrace),
            "[" => Some(Self::LBracket),
            "]" => Some(Self::RBracket),
            "," => Some(Self::Comma),
            ";" => Some(Self::Semicolon),
            _ => None,
        }
    }

    /// Canonical upper-case name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Keyword => "KEYWORD",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::OpPlus => "OP_PLUS",
            Self::OpMinus => "OP_MINUS",
            Self::OpStar => "OP_STAR",
            Self::OpSlash => "OP_SLASH",
            Self::OpEq => "OP_EQ",
            Self::OpNe => "OP_NE",
            Self::OpLt => "OP_LT",
            Self::OpGt => "OP_GT",
            Self::OpLe => "OP_LE",
            Self::OpGe => "OP_GE",
            Self::OpAssign => "OP_ASSIGN",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
