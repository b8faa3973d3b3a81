//! Core lexer implementation.

use alifc_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode;
use crate::LexError;

/// Lexer for the alif language.
///
/// Transforms source text into a stream of tokens, skipping whitespace
/// and `//` comments. The first unrecognized character aborts with a
/// [`LexError`].
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Returns a token of kind [`TokenKind::Eof`] at end of
    /// input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof, ""));
        }

        match self.cursor.current_char() {
            '(' => Ok(self.single_char(TokenKind::LParen, "(")),
            ')' => Ok(self.single_char(TokenKind::RParen, ")")),
            '{' => Ok(self.single_char(TokenKind::LBrace, "{")),
            '}' => Ok(self.single_char(TokenKind::RBrace, "}")),
            '+' => Ok(self.single_char(TokenKind::Plus, "+")),
            '-' => Ok(self.single_char(TokenKind::Minus, "-")),
            '*' => Ok(self.single_char(TokenKind::Star, "*")),
            '/' => Ok(self.single_char(TokenKind::Slash, "/")),
            ';' | unicode::ARABIC_SEMICOLON => Ok(self.single_char(TokenKind::Semicolon, ";")),
            ',' | unicode::ARABIC_COMMA => Ok(self.single_char(TokenKind::Comma, ",")),
            '=' => Ok(self.lex_equals()),
            '!' => self.lex_bang(),
            '<' => Ok(self.lex_less()),
            '>' => Ok(self.lex_greater()),
            c if c.is_ascii_digit() => Ok(self.lex_number()),
            c if unicode::is_ident_start(c) => Ok(self.lex_identifier()),
            c => Err(self.error(format!("unexpected character '{}'", c))),
        }
    }

    /// Consumes the current character and produces a token with the
    /// given normalized lexeme.
    pub(crate) fn single_char(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        self.cursor.advance();
        self.make_token(kind, lexeme)
    }

    /// Builds a token spanning from the recorded token start to the
    /// current cursor position.
    pub(crate) fn make_token(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, self.token_span())
    }

    /// Builds a lexical error positioned at the current token start.
    pub(crate) fn error(&self, message: String) -> LexError {
        LexError {
            line: self.token_start_line,
            column: self.token_start_column,
            message,
        }
    }

    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}
