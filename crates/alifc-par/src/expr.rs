//! Expression parsing.
//!
//! Precedence ascends comparison < additive < multiplicative < unary;
//! each binary tier is a left-associative loop over its operators.

use alifc_lex::TokenKind;

use crate::ast::{BinOp, Call, Expr, UnOp};
use crate::{ParseError, Parser};

impl Parser {
    /// Parses an expression. Entry point is the lowest tier.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_comparison()
    }

    /// Parses `Additive ( (== | != | > | < | >= | <=) Additive )*`.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = comparison_op(self.current().kind) {
            self.advance();
            let right = self.parse_additive()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses `Multiplicative ( (+|-) Multiplicative )*`.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses `Unary ( (*|/) Unary )*`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses `'-' Unary | Primary`. Unary minus is right-associative,
    /// so `--س` nests.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(TokenKind::Minus) {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: UnOp::Neg,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parses a primary expression: number, identifier, call, or a
    /// parenthesized expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current().kind {
            TokenKind::Number => {
                let token = self.current().clone();
                self.advance();
                let value: i64 = token.lexeme.parse().map_err(|_| {
                    self.error_at(&token, format!("number literal '{}' is too large", token.lexeme))
                })?;
                Ok(Expr::Number(value))
            }
            TokenKind::Ident => {
                if self.peek().kind == TokenKind::LParen {
                    Ok(Expr::Call(self.parse_call()?))
                } else {
                    let name = self.current().lexeme.clone();
                    self.advance();
                    Ok(Expr::Ident(name))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            kind => Err(self.error_here(format!("unexpected {} in expression", kind))),
        }
    }

    /// Parses `name(args)` without the trailing semicolon; shared by
    /// expression and statement positions.
    pub(crate) fn parse_call(&mut self) -> Result<Call, ParseError> {
        let name = self.expect(TokenKind::Ident)?.lexeme;
        self.expect(TokenKind::LParen)?;

        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            args.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                self.advance();
                args.push(self.parse_expression()?);
            }
        }

        self.expect(TokenKind::RParen)?;
        Ok(Call { name, args })
    }
}

fn comparison_op(kind: TokenKind) -> Option<BinOp> {
    let op = match kind {
        TokenKind::EqEq => BinOp::Eq,
        TokenKind::NotEq => BinOp::Ne,
        TokenKind::Gt => BinOp::Gt,
        TokenKind::Lt => BinOp::Lt,
        TokenKind::GtEq => BinOp::Ge,
        TokenKind::LtEq => BinOp::Le,
        _ => return None,
    };
    Some(op)
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinOp, Expr, Stmt, UnOp};
    use crate::parse;

    /// Parses `ارجع <expr>;` inside a wrapper function and returns the
    /// expression.
    fn parse_expr(source: &str) -> Expr {
        let wrapped = format!("دالة رئيسية() {{ ارجع {}; }}", source);
        let program = parse(alifc_lex::tokenize(&wrapped).unwrap()).unwrap();
        match &program.functions[0].body.statements[0] {
            Stmt::Return { value } => value.clone(),
            other => panic!("expected return, got {:?}", other),
        }
    }

    fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_number() {
        assert_eq!(parse_expr("42"), Expr::Number(42));
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        // a + b * c: '*' is the right child of '+'.
        let expr = parse_expr("ا + ب * ج");
        assert_eq!(
            expr,
            binary(
                BinOp::Add,
                Expr::Ident("ا".to_string()),
                binary(
                    BinOp::Mul,
                    Expr::Ident("ب".to_string()),
                    Expr::Ident("ج".to_string())
                ),
            )
        );
    }

    #[test]
    fn test_mul_on_left_stays_left() {
        // a * b + c: '*' is the left child of '+'.
        let expr = parse_expr("ا * ب + ج");
        assert_eq!(
            expr,
            binary(
                BinOp::Add,
                binary(
                    BinOp::Mul,
                    Expr::Ident("ا".to_string()),
                    Expr::Ident("ب".to_string())
                ),
                Expr::Ident("ج".to_string()),
            )
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        // a - b - c parses as (a - b) - c.
        let expr = parse_expr("ا - ب - ج");
        assert_eq!(
            expr,
            binary(
                BinOp::Sub,
                binary(
                    BinOp::Sub,
                    Expr::Ident("ا".to_string()),
                    Expr::Ident("ب".to_string())
                ),
                Expr::Ident("ج".to_string()),
            )
        );
    }

    #[test]
    fn test_double_negation_nests() {
        let expr = parse_expr("--س");
        assert_eq!(
            expr,
            Expr::Unary {
                op: UnOp::Neg,
                operand: Box::new(Expr::Unary {
                    op: UnOp::Neg,
                    operand: Box::new(Expr::Ident("س".to_string())),
                }),
            }
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let expr = parse_expr("(ا + ب) * ج");
        assert_eq!(
            expr,
            binary(
                BinOp::Mul,
                binary(
                    BinOp::Add,
                    Expr::Ident("ا".to_string()),
                    Expr::Ident("ب".to_string())
                ),
                Expr::Ident("ج".to_string()),
            )
        );
    }

    #[test]
    fn test_comparison_below_additive() {
        // a + b > c parses as (a + b) > c.
        let expr = parse_expr("ا + ب > ج");
        assert!(matches!(expr, Expr::Binary { op: BinOp::Gt, .. }));
    }

    #[test]
    fn test_call_with_no_args() {
        let expr = parse_expr("اقرأ()");
        match expr {
            Expr::Call(call) => {
                assert_eq!(call.name, "اقرأ");
                assert!(call.args.is_empty());
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_call_args_keep_order() {
        let expr = parse_expr("جمع(1, 2 + 3, س)");
        match expr {
            Expr::Call(call) => {
                assert_eq!(call.args.len(), 3);
                assert_eq!(call.args[0], Expr::Number(1));
                assert!(matches!(call.args[1], Expr::Binary { op: BinOp::Add, .. }));
                assert_eq!(call.args[2], Expr::Ident("س".to_string()));
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_calls() {
        let expr = parse_expr("جمع(جمع(1, 2), 3)");
        match expr {
            Expr::Call(outer) => assert!(matches!(outer.args[0], Expr::Call(_))),
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_number_too_large_for_i64() {
        let wrapped = "دالة رئيسية() { ارجع 99999999999999999999; }";
        let err = parse(alifc_lex::tokenize(wrapped).unwrap()).unwrap_err();
        assert!(err.message.contains("too large"), "message was: {}", err.message);
    }

    #[test]
    fn test_empty_parens_in_expression_fail() {
        let wrapped = "دالة رئيسية() { ارجع (); }";
        assert!(parse(alifc_lex::tokenize(wrapped).unwrap()).is_err());
    }
}
