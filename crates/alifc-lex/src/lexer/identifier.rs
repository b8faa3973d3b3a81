//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of identifier-continue characters, then
    /// checks the lexeme against the Arabic keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        match keyword_from_ident(text) {
            Some(kind) => self.make_token(kind, text),
            None => self.make_token(TokenKind::Ident, text),
        }
    }
}
