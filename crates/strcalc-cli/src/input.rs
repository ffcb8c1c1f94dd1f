//! Getting an expression from argv or stdin

use anyhow::{Context, Result};
use std::io::Read;

/// The expression to evaluate: the argument if given, stdin otherwise
///
/// Arguments get `\n` unescaped unless `raw`; stdin loses one trailing
/// line ending.
pub fn read_expression(argument: Option<&str>, raw: bool) -> Result<String> {
    match argument {
        Some(expression) if raw => Ok(expression.to_string()),
        Some(expression) => Ok(unescape_newlines(expression)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read expression from stdin")?;
            Ok(strip_line_ending(&buffer).to_string())
        },
    }
}

/// Replace the two characters `\n` with a newline
///
/// Shells make a literal newline awkward to type, and `\n` is how every
/// header example is written.
pub fn unescape_newlines(expression: &str) -> String {
    expression.replace("\\n", "\n")
}

fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
