//! Token reading and recognition for the scanner.
//!
//! This module provides the methods that recognize punctuation, operators,
//! string and number literals, and identifiers/keywords from the character
//! buffer.

use super::Scanner;
use super::error::ScanError;
use crate::token::{Literal, Token, TokenKind};

impl Scanner {
    /// Scans and returns the single next token, or `None` for input the
    /// scanner discards (comments) rather than turning into a token.
    ///
    /// Assumes [`Scanner::skip_inline_whitespace`] has already run; the
    /// caller (`tokenize`) is responsible for looping.
    pub(super) fn scan_token(&mut self) -> Option<Result<Token, ScanError>> {
        let start = self.current;
        let line = self.line;
        let c = self.advance();

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '!' => self.one_or_two('=', TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.one_or_two('=', TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.one_or_two('=', TokenKind::Less, TokenKind::LessEqual),
            '>' => self.one_or_two('=', TokenKind::Greater, TokenKind::GreaterEqual),
            '/' => {
                if self.advance_if('/') {
                    self.skip_line_comment();
                    return None;
                }
                TokenKind::Slash
            }
            '"' => return Some(self.read_string(line)),
            _ if c.is_ascii_digit() => return Some(Ok(self.read_number(start, line))),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                return Some(Ok(self.read_identifier(start, line)));
            }
            _ => return Some(Err(ScanError::new("Unexpected character.", line))),
        };

        let lexeme = self.lexeme_since(start);
        Some(Ok(Token::new(kind, lexeme, line)))
    }

    /// Returns `second` if the next character matches `expected` (consuming
    /// it), otherwise `first`. Used for `!=`, `==`, `<=`, `>=`.
    fn one_or_two(&mut self, expected: char, first: TokenKind, second: TokenKind) -> TokenKind {
        if self.advance_if(expected) { second } else { first }
    }

    fn lexeme_since(&self, start: usize) -> String {
        self.chars[start..self.current].iter().collect()
    }

    /// Reads a string literal. The opening `"` has already been consumed.
    ///
    /// Strings may span multiple lines; no escape processing is performed.
    /// An unterminated string is reported at the line the string started on,
    /// and scanning continues from end-of-input.
    fn read_string(&mut self, start_line: usize) -> Result<Token, ScanError> {
        let mut value = String::new();
        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance();
                    return Ok(Token::with_literal(
                        TokenKind::String,
                        format!("\"{value}\""),
                        Literal::Str(value),
                        start_line,
                    ));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => return Err(ScanError::new("Unterminated string.", start_line)),
            }
        }
    }

    /// Reads a number literal: digits, optionally `.` followed by digits.
    /// A leading or trailing `.` is not part of the number.
    fn read_number(&mut self, start: usize, line: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // consume '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = self.lexeme_since(start);
        let value: f64 = lexeme.parse().expect("scanned number text must parse");
        Token::with_literal(TokenKind::Number, lexeme, Literal::Number(value), line)
    }

    /// Reads an identifier, then resolves it against the keyword table.
    fn read_identifier(&mut self, start: usize, line: usize) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = self.lexeme_since(start);
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, line)
    }
}
