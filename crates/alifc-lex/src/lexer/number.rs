//! Number literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal number literal.
    ///
    /// Consumes the maximal run of ASCII digits. Negation is not part
    /// of the literal; `-5` is a unary minus applied to `5`.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(TokenKind::Number, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    #[test]
    fn test_single_digit() {
        let token = Lexer::new("7").next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, "7");
    }

    #[test]
    fn test_multi_digit() {
        let token = Lexer::new("123456").next_token().unwrap();
        assert_eq!(token.lexeme, "123456");
    }

    #[test]
    fn test_number_stops_at_letter() {
        let mut lexer = Lexer::new("12اب");
        let number = lexer.next_token().unwrap();
        assert_eq!(number.kind, TokenKind::Number);
        assert_eq!(number.lexeme, "12");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ident);
    }

    #[test]
    fn test_minus_is_separate_token() {
        let mut lexer = Lexer::new("-5");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Minus);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
    }
}
