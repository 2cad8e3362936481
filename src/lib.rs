//! # IBTAC Lexical Analyzer
//!
//! A hand-written scanner for a small experimental language with:
//! - two identifier forms (standard, and the `139`-prefixed student form)
//! - numbers with leading-dot, trailing-dot and exponent forms
//! - `$`-delimited strings that may span lines
//! - two spellings of not-equal (`!=` and `<>`)
//! - `//` line comments and non-nesting `/* */` block comments
//!
//! ## Architecture
//!
//! - `lexer`: the `Scanner` and its token types
//! - `error`: the lexical error taxonomy and diagnostics
//! - `output`: table and JSON renderings of a token list

pub mod error;
pub mod lexer;
pub mod output;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexErrorKind, LexResult, SourceLocation};
pub use lexer::{Scanner, Token, TokenKind};
pub use output::OutputFormat;

use tracing::debug;

/// Version of the IBTAC lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a complete source text into tokens.
///
/// Every call uses a fresh [`Scanner`], so independent scans share no state.
/// On success the final token is always [`TokenKind::Eof`]. The first lexical
/// error aborts the scan.
pub fn scan(source: &str) -> LexResult<Vec<Token>> {
    debug!(len = source.len(), "scanning source");

    let tokens = Scanner::new(source).tokenize().map_err(|e| {
        debug!(error = %e, "scan failed");
        e
    })?;

    debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}
