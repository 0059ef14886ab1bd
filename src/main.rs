//! Command-line entry point for Citrine.

use std::io::{self, Write};
use std::process::ExitCode;

use citrine::{cli, telemetry};
use clap::Parser;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    telemetry::init();

    let mut stdout = io::stdout().lock();
    match cli::run(args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            if let Err(write_err) = writeln!(stdout, "Error: {err}") {
                tracing::warn!(error = %write_err, "failed to report command error");
            }
            ExitCode::FAILURE
        }
    }
}
