//! Program, function, and block parsing.

use alifc_lex::TokenKind;

use crate::ast::{Block, Function, Program};
use crate::{ParseError, Parser};

impl Parser {
    /// Parses the entire program: a sequence of function definitions
    /// terminated by end of file.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut functions = Vec::new();
        while !self.check(TokenKind::Eof) {
            functions.push(self.parse_function()?);
        }
        Ok(Program { functions })
    }

    /// Parses a function definition: `دالة name(params) { body }`.
    pub(crate) fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.expect(TokenKind::Function)?;
        let name = self.expect(TokenKind::Ident)?.lexeme;

        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            params.push(self.expect(TokenKind::Ident)?.lexeme);
            while self.check(TokenKind::Comma) {
                self.advance();
                params.push(self.expect(TokenKind::Ident)?.lexeme);
            }
        }
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(Function { name, params, body })
    }

    /// Parses a brace-delimited block of statements.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.check(TokenKind::Eof) {
                return Err(self.error_here("expected '}', found end of file".to_string()));
            }
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Block { statements })
    }
}
