//! Runtime error type.

use crate::token::Token;

/// An error raised while executing an already-parsed, already-resolved
/// program: a type mismatch, an arity mismatch, an undefined variable that
/// slipped past static resolution (only possible for a global).
///
/// Unlike [`crate::parser::ParseError`] and [`crate::resolver::ResolverError`],
/// this isn't a static error — it can only occur once the program is
/// running, so [`crate::session::Session`] reports it differently (message
/// then `[line N]`, no `Error at '...'` phrasing) and it maps to exit code
/// 70 rather than 65.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        RuntimeError {
            token,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.token.line)
    }
}

impl std::error::Error for RuntimeError {}
