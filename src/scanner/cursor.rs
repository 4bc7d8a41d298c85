//! Cursor position management for the scanner.
//!
//! This module provides methods for tracking and advancing the scanner's
//! position within the character buffer.

use super::Scanner;

impl Scanner {
    /// Returns the current character without consuming it.
    pub(super) fn current_char(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    /// Returns the next character without consuming it (single-character
    /// lookahead beyond `current_char`, used to recognize two-char operators).
    pub(super) fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// Consumes and returns the current character, tracking line number.
    pub(super) fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the current character only if it matches `expected`.
    pub(super) fn advance_if(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}
