//! alifc-lex - Lexical analyzer for the alif language.
//!
//! Transforms Arabic-script source text into a flat token stream.
//! Identifiers may mix ASCII letters, underscores, digits, and Arabic
//! characters; the eight reserved words (`متغير`, `اذا`, `والا`,
//! `بينما`, `لكل`, `دالة`, `ارجع`, `اطبع`) are promoted to keyword
//! tokens. The Arabic semicolon `؛` and comma `،` are accepted as
//! aliases for `;` and `,`.
//!
//! Lexing is fail-fast: the first unrecognized character or malformed
//! operator aborts with a [`LexError`] carrying line and column.

pub mod cursor;
mod lexer;
pub mod token;
pub mod unicode;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use thiserror::Error;

/// Lexical error, positioned at the first character of the offending
/// input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("line {line}, column {column}: {message}")]
pub struct LexError {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
    /// Human-readable description.
    pub message: String,
}

/// Tokenize an entire source string.
///
/// Returns the token sequence terminated by exactly one
/// [`TokenKind::Eof`] token, or the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
