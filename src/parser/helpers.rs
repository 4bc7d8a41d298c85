//! Token stream navigation.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser {
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    pub(super) fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    pub(super) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(super) fn peek(&self) -> Token {
        self.tokens[self.pos].clone()
    }

    pub(super) fn previous(&self) -> Token {
        self.tokens[self.pos - 1].clone()
    }

    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(self.peek(), message))
        }
    }

    pub(super) fn error(&self, token: Token, message: &str) -> ParseError {
        ParseError::new(token, message)
    }

    /// Records a non-fatal error — one the parser can recover from in place
    /// (e.g. too many call arguments, an invalid assignment target) without
    /// resynchronizing the whole declaration.
    pub(super) fn report(&mut self, token: Token, message: &str) {
        let error = self.error(token, message);
        self.errors.push(error);
    }

    /// Discards tokens until it lands at a likely statement boundary, so the
    /// parser can resume after a syntax error instead of aborting the whole
    /// parse. Called by [`Parser::parse`] after a declaration fails.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }

            self.advance();
        }
    }
}
