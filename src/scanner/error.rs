//! Lexical analysis error type.

/// An error produced while scanning a single token.
///
/// The scanner never aborts on one of these — it records the error, reports
/// it through whatever sink the caller gave it, and continues scanning so a
/// single source file can surface more than one lexical mistake per pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    pub message: String,
    pub line: usize,
}

impl ScanError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        ScanError {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for ScanError {}
