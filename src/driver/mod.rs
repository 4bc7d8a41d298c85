//! Orchestrates the scan → parse → resolve → interpret pipeline for both
//! CLI entry points: running a whole file and driving an interactive REPL.
//!
//! This plays the role the original driver's `build`/`run` pair played for
//! the compiler pipeline, but there is no codegen or linking phase left to
//! orchestrate — the driver's only job is wiring the four passes together
//! and deciding an exit code from the [`Session`] they leave behind.

use std::io::{self, BufRead, Write};

use loxrs::interpreter::Interpreter;
use loxrs::parser::Parser;
use loxrs::resolver::Resolver;
use loxrs::scanner::Scanner;
use loxrs::session::Session;

use crate::diagnostics::{self, StaticError};

/// Exit code for CLI misuse (§6): more positional arguments than this CLI
/// accepts.
pub const EX_USAGE: i32 = 64;
/// Exit code when any static error (scan/parse/resolve) was reported.
pub const EX_DATAERR: i32 = 65;
/// Exit code when a runtime error aborted evaluation.
pub const EX_SOFTWARE: i32 = 70;

/// Reads `path` in full and runs it as one program. Returns the process
/// exit code per §6: `0` on success, `65` if any static error was reported,
/// `70` if a runtime error aborted execution.
pub fn run_file(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read '{path}': {err}");
            return EX_DATAERR;
        }
    };

    let mut session = Session::new();
    let mut interpreter = Interpreter::new(Default::default());
    run_source(&source, &mut interpreter, &mut session);

    if session.had_error() {
        EX_DATAERR
    } else if session.had_runtime_error() {
        EX_SOFTWARE
    } else {
        0
    }
}

/// Runs an interactive, line-at-a-time REPL against a single long-lived
/// interpreter and session. Each line is independently scanned, parsed,
/// resolved, and run; the session's error flags are cleared afterward so a
/// mistake on one line doesn't poison the next.
pub fn run_repl() -> i32 {
    let mut session = Session::new();
    let mut interpreter = Interpreter::new(Default::default());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF (Ctrl-D)
            Ok(_) => {}
            Err(_) => break,
        }

        run_source(&line, &mut interpreter, &mut session);
        session.reset();
    }

    0
}

/// Runs one chunk of source against an already-built interpreter, reporting
/// every error it produces through `session`. Shared by file mode (one big
/// chunk) and REPL mode (one line per call).
fn run_source(source: &str, interpreter: &mut Interpreter, session: &mut Session) {
    let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
    if !scan_errors.is_empty() {
        diagnostics::report_all(session, scan_errors.iter().map(StaticError::Scan));
        return;
    }

    let (statements, parse_errors) = Parser::new(tokens).parse();
    if !parse_errors.is_empty() {
        diagnostics::report_all(session, parse_errors.iter().map(StaticError::Parse));
        return;
    }

    let (locals, resolve_errors) = Resolver::new().resolve(&statements);
    if !resolve_errors.is_empty() {
        diagnostics::report_all(session, resolve_errors.iter().map(StaticError::Resolve));
        return;
    }

    interpreter.extend_locals(locals);
    if let Err(err) = interpreter.interpret(&statements) {
        session.report_runtime_error(err);
    }
}
