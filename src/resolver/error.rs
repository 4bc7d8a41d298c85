//! Static resolution error type.

use crate::token::{Token, TokenKind};

/// A static error raised while resolving variable scope — a use-before-ready
/// local or a `return` outside a function. Reported the same way a
/// [`crate::parser::ParseError`] is: as a static error, before the program
/// ever runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverError {
    pub token: Token,
    pub message: String,
}

impl ResolverError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        ResolverError {
            token,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.token.kind == TokenKind::Eof {
            write!(f, "[line {}] Error at end: {}", self.token.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}",
                self.token.line, self.token.lexeme, self.message
            )
        }
    }
}

impl std::error::Error for ResolverError {}
