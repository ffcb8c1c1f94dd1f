// this_file: crates/strcalc/src/resolver.rs

//! Delimiter resolution: the optional `//` header
//!
//! Two header shapes are understood:
//!
//! - `//X\n...` - everything between `//` and the newline is one delimiter
//! - `//[D1][D2]...\n...` - bracketed delimiters, any number of them
//!
//! A header that fits neither shape is taken as shape A. Nothing here fails.

use strcalc_core::{
    traits::Resolver,
    types::{DelimiterSet, Resolved},
    CalcParams, Result,
};

const HEADER_PREFIX: &str = "//";

/// Resolver that reads custom delimiters from a leading `//` line
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderResolver;

impl HeaderResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for HeaderResolver {
    fn name(&self) -> &'static str {
        "header"
    }

    fn resolve(&self, expression: &str, params: &CalcParams) -> Result<Resolved> {
        let mut delimiters: DelimiterSet = params.default_delimiters.iter().cloned().collect();

        if !has_custom_header(expression) {
            return Ok(Resolved {
                delimiters,
                body: expression.to_string(),
                has_header: false,
            });
        }

        let custom = custom_delimiters(header_spec(expression));
        log::trace!("Custom delimiters from header: {custom:?}");
        delimiters.extend(custom);

        Ok(Resolved {
            delimiters,
            body: strip_header(expression).to_string(),
            has_header: true,
        })
    }
}

/// Does the expression open with `//`?
pub fn has_custom_header(expression: &str) -> bool {
    expression.starts_with(HEADER_PREFIX)
}

/// The first line minus its `//`
fn header_spec(expression: &str) -> &str {
    let first_line = expression.split('\n').next().unwrap_or_default();
    first_line.strip_prefix(HEADER_PREFIX).unwrap_or(first_line)
}

/// Delimiters declared by a header spec, empty ones dropped
///
/// `[***]` gives `***`, `[*][%]` gives `*` and `%`, `;` gives `;`.
pub fn custom_delimiters(spec: &str) -> Vec<String> {
    let delimiters: Vec<&str> = match bracketed_inner(spec) {
        Some(inner) => inner.split("][").collect(),
        None => vec![spec],
    };

    delimiters
        .into_iter()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inside of a `[..]` list: first and last characters removed
///
/// Matches when the spec opens with `[` and a `]` follows at least one
/// character later. The last character is dropped whatever it is.
fn bracketed_inner(spec: &str) -> Option<&str> {
    let rest = spec.strip_prefix('[')?;
    let mut chars = rest.char_indices();
    chars.next()?;
    if !chars.any(|(_, c)| c == ']') {
        return None;
    }
    let last = rest.chars().next_back()?;
    Some(&rest[..rest.len() - last.len_utf8()])
}

/// Everything after the first newline; the whole input when there is none
pub fn strip_header(expression: &str) -> &str {
    match expression.find('\n') {
        Some(pos) => &expression[pos + 1..],
        None => expression,
    }
}
