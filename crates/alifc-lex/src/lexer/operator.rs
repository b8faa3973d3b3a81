//! Operator lexing.
//!
//! Two-character operators are scanned greedily: `==`, `!=`, `>=`,
//! `<=` win over their one-character prefixes. A lone `!` has no
//! meaning in the language and is a lexical error.

use crate::token::{Token, TokenKind};
use crate::{LexError, Lexer};

impl<'a> Lexer<'a> {
    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::EqEq, "==")
        } else {
            self.make_token(TokenKind::Assign, "=")
        }
    }

    /// Lexes not-equals.
    ///
    /// Handles: `!=`. A lone `!` is an error.
    pub(crate) fn lex_bang(&mut self) -> Result<Token, LexError> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(self.make_token(TokenKind::NotEq, "!="))
        } else {
            Err(self.error("unexpected character '!'".to_string()))
        }
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::LtEq, "<=")
        } else {
            self.make_token(TokenKind::Lt, "<")
        }
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GtEq, ">=")
        } else {
            self.make_token(TokenKind::Gt, ">")
        }
    }
}
