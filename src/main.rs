//! # gis CLI
//!
//! This is the binary entry point for the `gis` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Printing a fatal error once and exiting with status 1.
//!
//! The core application logic is defined in the `lib.rs` library crate, so the
//! binary is a thin wrapper around the reusable library functionality.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use gis::output::diagnostic_line;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let palette = cli.palette();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                diagnostic_line(log::Level::Error, &format!("{:#}", e), palette)
            );
            ExitCode::FAILURE
        }
    }
}
