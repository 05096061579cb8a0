#![forbid(unsafe_code)]

//! Entry point: one-time logging setup, argument parsing, dispatch.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use manage_translations::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Mirrors the classic `LEVEL: message` maintenance-script output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };

    let base = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            error!("cannot determine the working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run(command, &base) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
