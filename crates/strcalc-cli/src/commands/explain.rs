//! Explain command implementation
//!
//! Runs the stage-based pipeline and prints what each stage produced.
//! Negatives still get a full breakdown; the command then fails with the
//! validation error.

use anyhow::{Context, Result};
use strcalc::CalcParams;

use crate::cli::ExplainArgs;
use crate::input::read_expression;
use crate::jsonl::Explanation;

pub fn run(args: &ExplainArgs) -> Result<()> {
    let expression = read_expression(args.eval.expression.as_deref(), args.eval.raw)?;
    let params = CalcParams::with_upper_bound(args.eval.options.max);

    let context = strcalc::explain(&expression, params)?;
    let explanation = Explanation::from(&context);

    if args.json {
        let json =
            serde_json::to_string_pretty(&explanation).context("Failed to serialize breakdown")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&explanation));
    }

    if let Some(rejection) = context.rejection() {
        return Err(rejection.clone().into());
    }
    Ok(())
}

fn render_text(explanation: &Explanation) -> String {
    let mut out = String::new();
    out.push_str(&format!("expression: {:?}\n", explanation.expression));
    out.push_str(&format!(
        "delimiters: {:?}{}\n",
        explanation.delimiters,
        if explanation.has_header {
            " (custom header)"
        } else {
            ""
        }
    ));
    out.push_str(&format!("body:       {:?}\n", explanation.body));
    out.push_str(&format!("tokens:     {:?}\n", explanation.tokens));
    out.push_str(&format!("accepted:   {:?}\n", explanation.accepted));
    out.push_str(&format!("ignored:    {:?}\n", explanation.ignored));
    out.push_str(&format!("negatives:  {:?}\n", explanation.negatives));
    match (explanation.total, &explanation.error) {
        (Some(total), _) => out.push_str(&format!("total:      {total}\n")),
        (None, Some(error)) => out.push_str(&format!("error:      {error}\n")),
        (None, None) => out.push_str("total:      -\n"),
    }
    out
}
