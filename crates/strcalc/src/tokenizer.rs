// this_file: crates/strcalc/src/tokenizer.rs

//! Splitting a body on every delimiter

use strcalc_core::{traits::Tokenizer, types::DelimiterSet, Result};

/// Tokenizer that applies one delimiter at a time to every segment
///
/// Delimiters are taken last to first, so custom delimiters from a header
/// split before the defaults do. Segments are never merged or trimmed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialSplitter;

impl SequentialSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for SequentialSplitter {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn tokenize(&self, body: &str, delimiters: &DelimiterSet) -> Result<Vec<String>> {
        if delimiters.is_empty() {
            return Ok(vec![body.to_string()]);
        }
        Ok(split_all(body, delimiters.as_slice())
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

/// Borrowing core of [`SequentialSplitter`]
pub fn split_all<'a, S: AsRef<str>>(body: &'a str, delimiters: &[S]) -> Vec<&'a str> {
    let mut segments = vec![body];

    for delimiter in delimiters.iter().rev() {
        let delimiter = delimiter.as_ref();
        // str::split on "" yields empty edges around every char
        if delimiter.is_empty() {
            continue;
        }
        segments = segments
            .into_iter()
            .flat_map(|segment| segment.split(delimiter))
            .collect();
    }

    segments
}
