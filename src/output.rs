//! Rendering of scanned tokens
//!
//! Two formats are supported: a fixed-width table for people and a JSON list
//! of `{type, lexeme, line, column}` records for tools.

use crate::lexer::Token;

/// Output format for a token listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Render tokens as a fixed-width table, one token per line.
///
/// Columns are the kind (left-aligned, 12 wide), the quoted lexeme
/// (right-aligned, 20 wide) and the `line:column` position.
pub fn render_table(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let quoted = format!("{:?}", token.lexeme);
        out.push_str(&format!(
            "{:<12} {:>20}  @ {}:{}\n",
            token.kind, quoted, token.line, token.column
        ));
    }
    out
}

/// Render tokens as a pretty-printed JSON array
pub fn render_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

/// Parse a JSON array produced by [`render_json`]
pub fn parse_json(json: &str) -> serde_json::Result<Vec<Token>> {
    serde_json::from_str(json)
}
