// this_file: crates/strcalc/src/accumulator.rs

//! Token parsing, validation and summation

use strcalc_core::{traits::Accumulator, types::Partition, CalcParams};

/// Accumulator that sums values in `(0, upper_bound]`
///
/// Tokens parse loosely (see [`parse_loose`]). Negatives are collected,
/// zeros contribute nothing, values above the bound are set aside.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundedAccumulator;

impl BoundedAccumulator {
    pub fn new() -> Self {
        Self
    }
}

impl Accumulator for BoundedAccumulator {
    fn name(&self) -> &'static str {
        "bounded"
    }

    fn partition(&self, tokens: &[String], params: &CalcParams) -> Partition {
        let mut partition = Partition::default();

        for value in tokens.iter().map(|token| parse_loose(token)) {
            if value < 0 {
                partition.negatives.push(value);
            } else if value > params.upper_bound {
                partition.ignored.push(value);
            } else if value > 0 {
                partition.accepted.push(value);
            }
        }

        if !partition.negatives.is_empty() {
            log::debug!("Found {} negative values", partition.negatives.len());
        }
        partition
    }
}

/// Integer value of a token's numeric prefix, or 0 when it has none
///
/// Leading whitespace is skipped, one `+` or `-` is allowed, then the
/// longest run of ASCII digits is read. `"3x"` is 3, `"x"` is 0, `" -7"`
/// is -7. Runs too long for `i64` saturate, keeping their sign.
pub fn parse_loose(token: &str) -> i64 {
    let trimmed = token.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = match value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        }) {
            Some(next) => next,
            None if negative => return i64::MIN,
            None => return i64::MAX,
        };
    }

    value
}
