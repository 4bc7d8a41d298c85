//! Plain-text error rendering for the CLI.
//!
//! The reference implementation's own diagnostics are rendered with
//! `ariadne`'s span-highlighted reports. This crate's error contract (§6)
//! pins exact substrings — `[line N]`, `Error at '...'` — that a
//! span-rendered report wouldn't reliably reproduce, so this module sticks
//! to the plain format the error types' own `Display` impls already
//! produce, and exists mainly to give every phase's errors one shared
//! reporting path instead of `eprintln!` calls scattered through the driver.

use loxrs::parser::ParseError;
use loxrs::resolver::ResolverError;
use loxrs::scanner::ScanError;
use loxrs::session::Session;

/// Unifies the three static-error phases into one type, the way this
/// codebase's own driver unifies its compile phases into one `CompileError`.
pub enum StaticError<'a> {
    Scan(&'a ScanError),
    Parse(&'a ParseError),
    Resolve(&'a ResolverError),
}

impl std::fmt::Display for StaticError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaticError::Scan(e) => write!(f, "{e}"),
            StaticError::Parse(e) => write!(f, "{e}"),
            StaticError::Resolve(e) => write!(f, "{e}"),
        }
    }
}

/// Reports every error in `errors` through `session`, so a single bad source
/// file can surface all of its static errors in one run rather than just
/// the first.
pub fn report_all<'a>(session: &mut Session, errors: impl Iterator<Item = StaticError<'a>>) {
    for error in errors {
        session.report_static_error(error);
    }
}
