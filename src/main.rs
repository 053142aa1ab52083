//! Garrison bot entry point - speaks the engine protocol on stdin/stdout.

// Allow print in the binary; diagnostics go through the logger to stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Diagnostics must stay off stdout: the engine owns that stream.
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match garrison::session::play(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
