//! Statement and declaration parsing.

use std::rc::Rc;

use super::Parser;
use super::error::ParseError;
use crate::ast::{FunctionDecl, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// `declaration → funDecl | varDecl | statement`.
    pub(super) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_token(&[TokenKind::Fun]) {
            return self.function("function");
        }
        if self.match_token(&[TokenKind::Var]) {
            return self.var_declaration();
        }
        self.statement()
    }

    fn function(&mut self, kind: &str) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, &format!("Expect {kind} name."))?;
        self.consume(
            TokenKind::LeftParen,
            &format!("Expect '(' after {kind} name."),
        )?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= 255 {
                    let token = self.peek();
                    self.report(token, "Can't have more than 255 parameters.");
                }
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);
                if !self.match_token(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;

        self.consume(
            TokenKind::LeftBrace,
            &format!("Expect '{{' before {kind} body."),
        )?;
        let body = self.block()?;

        Ok(Stmt::new(StmtKind::Function(Rc::new(FunctionDecl {
            name,
            params,
            body,
        }))))
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_token(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Stmt::new(StmtKind::Var { name, initializer }))
    }

    /// `statement → exprStmt | forStmt | ifStmt | printStmt | returnStmt | whileStmt | block`.
    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_token(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.match_token(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_token(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_token(&[TokenKind::Return]) {
            return self.return_statement();
        }
        if self.match_token(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.match_token(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::new(StmtKind::Block(self.block()?)));
        }
        self.expression_statement()
    }

    /// Desugars `for (init; cond; incr) body` into the `while` the
    /// interpreter actually knows how to run: `{ init; while (cond) { body;
    /// incr; } }`. A missing `cond` is treated as `true`; a missing `incr`
    /// is simply omitted.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_token(&[TokenKind::Semicolon]) {
            None
        } else if self.match_token(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(TokenKind::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::new(StmtKind::Block(vec![
                body,
                Stmt::new(StmtKind::Expression(increment)),
            ]));
        }

        let condition = condition.unwrap_or_else(|| self.true_literal());
        body = Stmt::new(StmtKind::While {
            condition,
            body: Box::new(body),
        });

        if let Some(initializer) = initializer {
            body = Stmt::new(StmtKind::Block(vec![initializer, body]));
        }

        Ok(body)
    }

    fn true_literal(&mut self) -> crate::ast::Expr {
        self.node(crate::ast::ExprKind::Literal(
            crate::ast::LiteralValue::Bool(true),
        ))
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_token(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::new(StmtKind::If {
            condition,
            then_branch,
            else_branch,
        }))
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::new(StmtKind::Print(value)))
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous();

        let value = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;

        Ok(Stmt::new(StmtKind::Return { keyword, value }))
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::new(StmtKind::While { condition, body }))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::new(StmtKind::Expression(expr)))
    }

    /// Parses the declarations inside a `{ ... }`, recovering from a failed
    /// one the same way the top-level [`Parser::parse`] loop does, so an
    /// error in one statement doesn't swallow the rest of the block.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
