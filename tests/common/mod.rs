//! Shared helper for integration tests: runs a source string through the
//! built CLI binary in file mode and captures its stdout/exit code.
//!
//! Each test file is compiled as its own crate, so not every helper is used
//! by every file.
#![allow(dead_code)]

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

/// The result of running one program through the CLI binary.
#[derive(Debug)]
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Writes `source` to a temporary script file and runs it through the built
/// `loxrs` binary, capturing stdout, stderr, and the process exit code.
pub fn run_source(source: &str) -> RunResult {
    let mut file = NamedTempFile::new().expect("failed to create temp script file");
    file.write_all(source.as_bytes())
        .expect("failed to write temp script file");

    let output = Command::new(env!("CARGO_BIN_EXE_loxrs"))
        .arg(file.path())
        .output()
        .expect("failed to run loxrs binary");

    RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().expect("process exited via signal"),
    }
}
