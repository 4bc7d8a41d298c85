//! Expression parsing: a standard recursive-descent precedence cascade.
//!
//! Each precedence level is its own method, from loosest (`assignment`) to
//! tightest (`primary`); each one parses its left operand by calling the
//! next-tighter level, then folds in same-precedence operators left to
//! right. `call` and `primary` are where the cascade bottoms out.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, LiteralValue};
use crate::token::TokenKind;

impl Parser {
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `assignment → IDENTIFIER "=" assignment | logic_or`.
    ///
    /// The left-hand side is parsed as an ordinary expression first; only
    /// once we see `=` do we check that it was actually a variable. An
    /// invalid target (e.g. `1 + 2 = 3`) is reported but does not abort
    /// parsing — assignment is rare enough as a parse error that recovering
    /// in place is friendlier than resynchronizing.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or()?;

        if self.match_token(&[TokenKind::Equal]) {
            let equals = self.previous();
            let value = self.assignment()?;

            return match expr.kind {
                ExprKind::Variable(name) => Ok(self.node(ExprKind::Assign {
                    name,
                    value: Box::new(value),
                })),
                _ => {
                    self.report(equals, "Invalid assignment target.");
                    Ok(expr)
                }
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and()?;
        while self.match_token(&[TokenKind::Or]) {
            let operator = self.previous();
            let right = self.and()?;
            expr = self.node(ExprKind::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.match_token(&[TokenKind::And]) {
            let operator = self.previous();
            let right = self.equality()?;
            expr = self.node(ExprKind::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        while self.match_token(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous();
            let right = self.comparison()?;
            expr = self.node(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while self.match_token(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous();
            let right = self.term()?;
            expr = self.node(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while self.match_token(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous();
            let right = self.factor()?;
            expr = self.node(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.match_token(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous();
            let right = self.unary()?;
            expr = self.node(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous();
            let right = self.unary()?;
            return Ok(self.node(ExprKind::Unary {
                operator,
                right: Box::new(right),
            }));
        }
        self.call()
    }

    /// `call → primary ( "(" arguments? ")" )*`.
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        while self.match_token(&[TokenKind::LeftParen]) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if arguments.len() >= 255 {
                    let token = self.peek();
                    self.report(token, "Can't have more than 255 arguments.");
                }
                arguments.push(self.expression()?);
                if !self.match_token(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(self.node(ExprKind::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        }))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(&[TokenKind::False]) {
            return Ok(self.node(ExprKind::Literal(LiteralValue::Bool(false))));
        }
        if self.match_token(&[TokenKind::True]) {
            return Ok(self.node(ExprKind::Literal(LiteralValue::Bool(true))));
        }
        if self.match_token(&[TokenKind::Nil]) {
            return Ok(self.node(ExprKind::Literal(LiteralValue::Nil)));
        }
        if self.match_token(&[TokenKind::Number]) {
            let value = self
                .previous()
                .literal
                .as_number()
                .expect("NUMBER token must carry a numeric literal");
            return Ok(self.node(ExprKind::Literal(LiteralValue::Number(value))));
        }
        if self.match_token(&[TokenKind::String]) {
            let value = self
                .previous()
                .literal
                .as_str()
                .expect("STRING token must carry a string literal")
                .to_string();
            return Ok(self.node(ExprKind::Literal(LiteralValue::String(value))));
        }
        if self.match_token(&[TokenKind::Identifier]) {
            return Ok(self.node(ExprKind::Variable(self.previous())));
        }
        if self.match_token(&[TokenKind::LeftParen]) {
            let inner = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(self.node(ExprKind::Grouping(Box::new(inner))));
        }

        Err(self.error(self.peek(), "Expect expression."))
    }
}
