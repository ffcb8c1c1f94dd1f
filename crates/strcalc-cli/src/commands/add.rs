//! Add command implementation
//!
//! Prints the sum of one expression.

use anyhow::Result;
use strcalc::CalcParams;

use crate::cli::EvalArgs;
use crate::input::read_expression;

pub fn run(args: &EvalArgs) -> Result<()> {
    let expression = read_expression(args.expression.as_deref(), args.raw)?;
    let pipeline = strcalc::pipeline_with(CalcParams::with_upper_bound(args.options.max))?;

    log::debug!("Evaluating {expression:?}");
    let total = pipeline.process(&expression)?;
    println!("{total}");

    Ok(())
}
