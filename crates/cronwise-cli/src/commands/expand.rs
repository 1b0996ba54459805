//! Expand command implementation
//!
//! Parses a cron expression and prints the expanded schedule as a field
//! table, or as JSON with `--json`.

use anyhow::Result;
use colored::Colorize;
use cronwise_schedule::parse;
use std::process::ExitCode;

use super::json_output::ExpandOutput;

/// Run the expand command.
///
/// # Arguments
/// * `expression` - The cron expression, quoted as a single argument
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the expression parsed, 1 otherwise.
pub fn run(expression: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(expression)
    } else {
        run_human(expression)
    }
}

/// Run expand with the human-readable field table.
fn run_human(expression: &str) -> Result<ExitCode> {
    match parse(expression) {
        Ok(schedule) => {
            println!("{}", schedule);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run expand with machine-readable JSON output on stdout.
fn run_json(expression: &str) -> Result<ExitCode> {
    let (output, code) = match parse(expression) {
        Ok(schedule) => (ExpandOutput::success(schedule), ExitCode::SUCCESS),
        Err(err) => (ExpandOutput::failure(&err), ExitCode::FAILURE),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Parse failures are reported to the user and folded into the exit code;
    // they never bubble up as command errors.
    #[test]
    fn test_run_is_infallible_over_parse_outcomes() {
        assert!(run("*/15 0 1,15 * 1-5 /usr/bin/find", false).is_ok());
        assert!(run("*/15 0 1,15 * 1-5 /usr/bin/find", true).is_ok());
        assert!(run("* * *", false).is_ok());
        assert!(run("60 * * * * /bin/true", true).is_ok());
    }
}
