//! Parse error type.

use crate::token::{Token, TokenKind};

/// A syntax error raised while parsing a single declaration.
///
/// Carries the offending token so the message can be rendered in the exact
/// `[line N] Error at '<lexeme>': <message>` form (or `at end` for `EOF`).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        ParseError {
            token,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
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

impl std::error::Error for ParseError {}
