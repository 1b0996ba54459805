//! Cronwise CLI - expands cron expressions into concrete time values.
//!
//! This binary parses a cron expression given as a single argument and
//! prints each field's expanded values, or an error describing the first
//! invalid field.

use clap::Parser;
use std::process::ExitCode;

// Use modules from the library crate
use cronwise_cli::commands;

mod cli_args;
use cli_args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match commands::expand::run(&cli.expression, cli.json) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
