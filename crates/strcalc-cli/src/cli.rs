//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// strcalc - sum delimited numbers from the command line
#[derive(Parser, Debug)]
#[command(name = "strcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum the numbers in an expression
    #[command(alias = "a")]
    Add(EvalArgs),

    /// Show every stage of an evaluation
    #[command(alias = "e")]
    Explain(ExplainArgs),

    /// Evaluate many expressions from a JSONL file
    Batch(BatchArgs),
}

/// Options shared by every command that evaluates
#[derive(Args, Debug, Clone)]
pub struct EvalOptions {
    /// Values above this are left out of the sum
    #[arg(short = 'm', long = "max", default_value_t = strcalc::DEFAULT_UPPER_BOUND)]
    pub max: i64,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate (reads from stdin if omitted)
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Take the argument literally; do not turn `\n` into a newline
    #[arg(long = "raw")]
    pub raw: bool,

    #[command(flatten)]
    pub options: EvalOptions,
}

/// Arguments for the explain command
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub eval: EvalArgs,

    /// Print the breakdown as JSON
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input JSONL file, one job per line (stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub options: EvalOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_accepts_negative_expression() {
        let cli = Cli::try_parse_from(["strcalc", "add", "-1,2"]);
        match cli.map(|c| c.command) {
            Ok(Commands::Add(args)) => {
                assert_eq!(args.expression.as_deref(), Some("-1,2"));
                assert_eq!(args.options.max, 1000);
            },
            other => unreachable!("unexpected parse result: {other:?}"),
        }
    }

    #[test]
    fn test_explain_flags() {
        let cli = Cli::try_parse_from(["strcalc", "explain", "--json", "--max", "10", "1,2"]);
        match cli.map(|c| c.command) {
            Ok(Commands::Explain(args)) => {
                assert!(args.json);
                assert_eq!(args.eval.options.max, 10);
                assert_eq!(args.eval.expression.as_deref(), Some("1,2"));
            },
            other => unreachable!("unexpected parse result: {other:?}"),
        }
    }
}
