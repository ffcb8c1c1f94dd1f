//! strcalc CLI - command-line front end for the string calculator

mod cli;
mod commands;
mod input;
mod jsonl;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add(args) => {
            init_logger(args.options.verbose);
            commands::add::run(&args)?;
        },
        Commands::Explain(args) => {
            init_logger(args.eval.options.verbose);
            commands::explain::run(&args)?;
        },
        Commands::Batch(args) => {
            init_logger(args.options.verbose);
            commands::batch::run(&args)?;
        },
    }

    Ok(())
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
