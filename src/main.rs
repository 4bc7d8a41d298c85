//! CLI entry point: runs a script file, or launches a REPL when no file is
//! given.

use clap::Parser;

mod diagnostics;
mod driver;

/// A tree-walking interpreter for a small scripting language.
#[derive(Parser)]
#[command(name = "loxrs")]
#[command(about = "A tree-walking interpreter", long_about = None)]
struct Cli {
    /// Script to run. Omit to start an interactive REPL.
    script: Option<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap's own exit code for a usage error doesn't match this
            // CLI's contract (§6: CLI misuse exits 64), so print its
            // message ourselves and pick the exit code.
            let _ = err.print();
            std::process::exit(driver::EX_USAGE);
        }
    };

    let exit_code = match cli.script {
        Some(path) => driver::run_file(&path),
        None => driver::run_repl(),
    };

    std::process::exit(exit_code);
}
