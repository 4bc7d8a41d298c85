//! Whitespace skipping for the scanner.

use super::Scanner;

impl Scanner {
    /// Skips space, tab, and carriage-return characters.
    ///
    /// Newlines are intentionally excluded: the scanner's main loop consumes
    /// them itself so it can bump the line counter without mistaking a blank
    /// line for a discarded token boundary.
    pub(super) fn skip_inline_whitespace(&mut self) {
        while matches!(self.current_char(), Some(' ') | Some('\t') | Some('\r')) {
            self.advance();
        }
    }

    /// Consumes a `//` line comment up to (not including) the next newline.
    pub(super) fn skip_line_comment(&mut self) {
        while self.current_char().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }
}
