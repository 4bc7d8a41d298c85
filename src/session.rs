//! Error accounting across a run of the pipeline.
//!
//! The reference implementation tracks `hadError`/`hadRuntimeError` as
//! process-wide static fields. That doesn't fit a REPL that must forget a
//! parse error from one line before trying the next, so this crate threads
//! the same two flags through an explicit `Session` value instead — owned by
//! the CLI driver, reset between REPL lines, read once at the end of a
//! file-mode run to pick an exit code.

use std::fmt;

/// Tracks whether any static or runtime error has been reported so far.
#[derive(Debug, Default)]
pub struct Session {
    had_error: bool,
    had_runtime_error: bool,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Prints a static error (scan/parse/resolve) in the `[line N] Error at
    /// '...': message` format and marks the session as errored.
    pub fn report_static_error(&mut self, error: impl fmt::Display) {
        eprintln!("{error}");
        self.had_error = true;
    }

    /// Prints a runtime error in the `message\n[line N]` format and marks the
    /// session as having hit a runtime error.
    pub fn report_runtime_error(&mut self, error: impl fmt::Display) {
        eprintln!("{error}");
        self.had_runtime_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears both flags. Called between REPL lines so a mistake on one line
    /// doesn't poison every line after it.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_no_errors() {
        let session = Session::new();
        assert!(!session.had_error());
        assert!(!session.had_runtime_error());
    }

    #[test]
    fn reporting_a_static_error_sets_only_that_flag() {
        let mut session = Session::new();
        session.report_static_error("[line 1] Error at end: Expect expression.");
        assert!(session.had_error());
        assert!(!session.had_runtime_error());
    }

    #[test]
    fn reporting_a_runtime_error_sets_only_that_flag() {
        let mut session = Session::new();
        session.report_runtime_error("Undefined variable 'x'.\n[line 1]");
        assert!(!session.had_error());
        assert!(session.had_runtime_error());
    }

    #[test]
    fn reset_clears_both_flags() {
        let mut session = Session::new();
        session.report_static_error("boom");
        session.report_runtime_error("boom");
        session.reset();
        assert!(!session.had_error());
        assert!(!session.had_runtime_error());
    }
}
