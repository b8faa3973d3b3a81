//! alifc-par - Recursive-descent parser for the alif language.
//!
//! Consumes the token stream produced by `alifc-lex` and materializes a
//! [`Program`] AST. The grammar, low to high precedence:
//!
//! ```text
//! Program       := Function*
//! Function      := 'دالة' IDENT '(' ParamList? ')' Block
//! Block         := '{' Statement* '}'
//! Statement     := VarDecl | Assign | If | While | Return | Print | CallStmt
//! Expr          := Comparison
//! Comparison    := Additive ( (== | != | > | < | >= | <=) Additive )*
//! Additive      := Multiplicative ( (+|-) Multiplicative )*
//! Multiplicative:= Unary ( (*|/) Unary )*
//! Unary         := '-' Unary | Primary
//! Primary       := NUMBER | IDENT | IDENT '(' ArgList? ')' | '(' Expr ')'
//! ```
//!
//! All binary operators are left-associative; unary minus chains.
//! Parsing is fail-fast: the first syntactic violation aborts with a
//! [`ParseError`] carrying line and column. There is no error recovery.

pub mod ast;
mod expr;
mod items;
mod stmt;

pub use ast::{BinOp, Block, Call, Expr, Function, Program, Stmt, UnOp};

use alifc_lex::{Token, TokenKind};
use thiserror::Error;

/// Syntax error, positioned at the offending token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
    /// Human-readable description.
    pub message: String,
}

/// Parse a full token stream into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Recursive-descent parser over a token buffer.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser for the given token stream.
    ///
    /// The stream is expected to end with an `Eof` token, as produced
    /// by `alifc_lex::tokenize`; one is synthesized if missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)) {
            let span = tokens.last().map(|t| t.span).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, "", span));
        }
        Self { tokens, pos: 0 }
    }

    /// Returns the token at the current position.
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the token one past the current position.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    /// Advances past the current token. Stops at the Eof terminator.
    pub(crate) fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Returns true if the current token has the given kind.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes a token of the expected kind, or fails.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.current().clone();
        if token.kind != kind {
            return Err(self.error_at(
                &token,
                format!("expected {}, found {}", kind, token.kind),
            ));
        }
        self.advance();
        Ok(token)
    }

    /// Builds a parse error positioned at the given token.
    pub(crate) fn error_at(&self, token: &Token, message: String) -> ParseError {
        ParseError {
            line: token.span.line,
            column: token.span.column,
            message,
        }
    }

    /// Builds a parse error positioned at the current token.
    pub(crate) fn error_here(&self, message: String) -> ParseError {
        let token = self.current().clone();
        self.error_at(&token, message)
    }
}
