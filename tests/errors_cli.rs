//! CLI-misuse exit code (§6): passing more than one positional argument.

use std::process::Command;

#[test]
fn more_than_one_argument_exits_64() {
    let output = Command::new(env!("CARGO_BIN_EXE_loxrs"))
        .arg("first.lox")
        .arg("second.lox")
        .output()
        .expect("failed to run loxrs binary");

    assert_eq!(output.status.code(), Some(64));
}
