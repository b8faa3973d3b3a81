//! Statement parsing.

use alifc_lex::TokenKind;

use crate::ast::Stmt;
use crate::{ParseError, Parser};

impl Parser {
    /// Parses a single statement, dispatching on the leading token.
    ///
    /// A leading identifier is disambiguated by one token of lookahead:
    /// `=` means assignment, `(` means a call statement, anything else
    /// is an error.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current().kind {
            TokenKind::Var => self.parse_var_decl(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Ident => match self.peek().kind {
                TokenKind::Assign => self.parse_assign(),
                TokenKind::LParen => {
                    let call = self.parse_call()?;
                    self.expect(TokenKind::Semicolon)?;
                    Ok(Stmt::Call(call))
                }
                _ => Err(self.error_here("unexpected identifier".to_string())),
            },
            // Tokenized but not part of any production.
            TokenKind::For => {
                Err(self.error_here("'لكل' is reserved and not yet supported".to_string()))
            }
            kind => Err(self.error_here(format!("unexpected {}", kind))),
        }
    }

    /// Parses `متغير name = expr؛`.
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Var)?;
        let name = self.expect(TokenKind::Ident)?.lexeme;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::VarDecl { name, value })
    }

    /// Parses `name = expr؛`.
    fn parse_assign(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Ident)?.lexeme;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Assign { name, value })
    }

    /// Parses `اذا (cond) { … }` with an optional `والا { … }`.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;

        let then_block = self.parse_block()?;

        let else_block = if self.check(TokenKind::Else) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_block,
            else_block,
        })
    }

    /// Parses `بينما (cond) { … }`.
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Stmt::While { condition, body })
    }

    /// Parses `ارجع expr؛`.
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Return)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Return { value })
    }

    /// Parses `اطبع(expr)؛`.
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Print)?;
        self.expect(TokenKind::LParen)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::Print { value })
    }
}
