//! Lexical analysis module
//!
//! This module handles tokenization of IBTAC source code.

pub mod cursor;
pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{is_keyword, Token, TokenKind, KEYWORDS};
