//! Lexical analyzer: turns source text into a token stream.
//!
//! # Overview
//!
//! The scanner walks the source left to right, producing one [`Token`] per
//! iteration. It is total: a malformed string or a stray character never
//! aborts scanning early. Instead the offending span is recorded as a
//! [`ScanError`] and scanning resumes at the next character, so a single
//! pass over the source can surface every lexical mistake at once.
//!
//! # Module Structure
//!
//! - [`error`] - [`ScanError`], the per-token lexical error type
//! - [`cursor`] - Character-buffer navigation
//! - [`skip`] - Whitespace and comment skipping
//! - [`tokens`] - Recognition of punctuation, literals, and identifiers
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Consumes the token stream this module produces

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::ScanError;

use crate::token::Token;

/// Scans a single source string into a token stream.
///
/// Built once per source string (a whole file, or a single REPL line) and
/// consumed by [`Scanner::scan_tokens`].
pub struct Scanner {
    chars: Vec<char>,
    current: usize,
    line: usize,
    errors: Vec<ScanError>,
}

impl Scanner {
    /// Creates a new scanner over `source`, starting at line 1.
    pub fn new(source: &str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            errors: Vec::new(),
        }
    }

    /// Scans the entire source into a token stream.
    ///
    /// Always returns a well-formed stream ending in exactly one `Eof`
    /// token, even when lexical errors were encountered — those are
    /// returned alongside as the second element, in the order they were
    /// found, so the caller can report all of them in one pass.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<ScanError>) {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.skip_inline_whitespace();
            if self.current_char() == Some('\n') {
                self.advance();
                continue;
            }
            if self.is_at_end() {
                break;
            }

            match self.scan_token() {
                Some(Ok(token)) => tokens.push(token),
                Some(Err(err)) => self.errors.push(err),
                None => {}
            }
        }

        tokens.push(Token::eof(self.line));
        (tokens, self.errors)
    }
}
