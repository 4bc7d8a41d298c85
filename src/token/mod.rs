//! Token definitions produced by the scanner and consumed by the parser.
//!
//! # Module Structure
//!
//! - [`kind`] - The closed set of lexical categories ([`TokenKind`])
//! - [`literal`] - The payload carried by `NUMBER` and `STRING` tokens
//!
//! # See Also
//!
//! * [`crate::scanner`] - Produces the token stream
//! * [`crate::parser`] - Consumes the token stream

mod kind;
mod literal;

pub use kind::TokenKind;
pub use literal::Literal;

/// A single lexical unit: a kind, the exact source text it came from, an
/// optional literal payload, and the 1-indexed line it starts on.
///
/// `Token` is cheap to clone (it owns its lexeme as a `String`) and is the
/// only unit of source-location information the rest of the pipeline needs —
/// this language reports errors by line, not by byte range.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The lexical category of this token.
    pub kind: TokenKind,
    /// The exact source text this token was scanned from.
    pub lexeme: String,
    /// The de-quoted string or parsed number, present only for `STRING`/`NUMBER`.
    pub literal: Literal,
    /// The 1-indexed source line this token starts on.
    pub line: usize,
}

impl Token {
    /// Creates a new token with no literal payload.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Literal::None,
            line,
        }
    }

    /// Creates a new token carrying a literal payload.
    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: usize,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Creates the final `EOF` token the scanner always appends.
    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    /// Returns the text used to name this token in error messages: the
    /// lexeme for any ordinary token, or `"end"` for `EOF` (§6 error format).
    pub fn error_name(&self) -> &str {
        if self.kind == TokenKind::Eof {
            "end"
        } else {
            &self.lexeme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_token_has_empty_lexeme() {
        let token = Token::eof(3);
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.lexeme, "");
        assert_eq!(token.line, 3);
    }

    #[test]
    fn error_name_uses_lexeme_for_ordinary_tokens() {
        let token = Token::new(TokenKind::Identifier, "count", 1);
        assert_eq!(token.error_name(), "count");
    }

    #[test]
    fn error_name_substitutes_end_for_eof() {
        let token = Token::eof(1);
        assert_eq!(token.error_name(), "end");
    }
}
