//! CLI argument definitions for the cronwise command-line interface.

use clap::Parser;

/// Cronwise - cron expression expansion
#[derive(Parser)]
#[command(name = "cronwise")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// The cron expression to expand, quoted as a single argument
    /// (e.g. "*/15 0 1,15 * 1-5 /usr/bin/find")
    pub expression: String,

    /// Output machine-readable JSON instead of the field table
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_expression_is_positional() {
        let cli = Cli::parse_from(["cronwise", "* * * * * /bin/true"]);
        assert_eq!(cli.expression, "* * * * * /bin/true");
        assert!(!cli.json);

        let cli = Cli::parse_from(["cronwise", "--json", "* * * * * /bin/true"]);
        assert!(cli.json);
    }
}
