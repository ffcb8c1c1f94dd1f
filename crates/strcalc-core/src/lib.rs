//! strcalc Core: three stages from a number expression to a sum
//!
//! An expression enters as a string, leaves as an integer (or as the list of
//! negative values that stopped it). This crate holds the pipeline that makes
//! that happen and the contracts each stage has to honour.
//!
//! ## The Pipeline
//!
//! 1. **Resolution** - An optional `//` header declares extra delimiters
//! 2. **Tokenization** - The body is split on every delimiter in turn
//! 3. **Accumulation** - Tokens become integers, negatives are rejected,
//!    values past the upper bound drop out, the rest are summed
//!
//! ## Build Your First Pipeline
//!
//! ```rust,no_run
//! use strcalc_core::{CalcParams, Pipeline};
//! use std::sync::Arc;
//!
//! # use strcalc_core::traits::*;
//! # use strcalc_core::types::*;
//! # struct MyResolver;
//! # impl Resolver for MyResolver {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn resolve(&self, _: &str, _: &CalcParams) -> strcalc_core::Result<Resolved> { unimplemented!() }
//! # }
//! # struct MyTokenizer;
//! # impl Tokenizer for MyTokenizer {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn tokenize(&self, _: &str, _: &DelimiterSet) -> strcalc_core::Result<Vec<String>> { unimplemented!() }
//! # }
//! # struct MyAccumulator;
//! # impl Accumulator for MyAccumulator {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn partition(&self, _: &[String], _: &CalcParams) -> Partition { unimplemented!() }
//! # }
//! let pipeline = Pipeline::builder()
//!     .resolver(Arc::new(MyResolver))
//!     .tokenizer(Arc::new(MyTokenizer))
//!     .accumulator(Arc::new(MyAccumulator))
//!     .params(CalcParams::default())
//!     .build()?;
//!
//! let total = pipeline.process("1,2,3")?;
//! # Ok::<(), strcalc_core::CalcError>(())
//! ```
//!
//! ## The Traits
//!
//! - [`Stage`] - One step of [`Pipeline::execute`]
//! - [`Resolver`] - Where the delimiter set comes from
//! - [`Tokenizer`] - Where the body becomes tokens
//! - [`Accumulator`] - Where tokens become a sum
//!
//! Data flows through the types in [`types`].

pub mod context;
pub mod error;
pub mod pipeline;
pub mod traits;

pub use context::PipelineContext;
pub use error::{CalcError, Result, ValidationError};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use traits::{Accumulator, Resolver, Stage, Tokenizer};

/// Delimiters every expression understands, in the order they are declared
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];

/// Largest value that still counts towards the sum
pub const DEFAULT_UPPER_BOUND: i64 = 1000;

/// The data structures that move between stages
pub mod types {
    use crate::error::ValidationError;

    /// Ordered delimiters, defaults first, custom ones appended
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct DelimiterSet {
        delimiters: Vec<String>,
    }

    impl DelimiterSet {
        pub fn new() -> Self {
            Self::default()
        }

        /// Append delimiters, keeping declaration order
        pub fn extend<I, S>(&mut self, delimiters: I)
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.delimiters.extend(delimiters.into_iter().map(Into::into));
        }

        pub fn as_slice(&self) -> &[String] {
            &self.delimiters
        }

        pub fn iter(&self) -> std::slice::Iter<'_, String> {
            self.delimiters.iter()
        }

        pub fn len(&self) -> usize {
            self.delimiters.len()
        }

        pub fn is_empty(&self) -> bool {
            self.delimiters.is_empty()
        }
    }

    impl<S: Into<String>> FromIterator<S> for DelimiterSet {
        fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
            Self {
                delimiters: iter.into_iter().map(Into::into).collect(),
            }
        }
    }

    /// What resolution hands to tokenization
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Resolved {
        /// Every delimiter the body is split on
        pub delimiters: DelimiterSet,
        /// The expression with any header line removed
        pub body: String,
        /// Whether a `//` header was found
        pub has_header: bool,
    }

    /// Parsed tokens sorted by what happens to them, encounter order kept
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Partition {
        /// Values in `(0, upper_bound]`
        pub accepted: Vec<i64>,
        /// Values above the upper bound
        pub ignored: Vec<i64>,
        /// Values below zero
        pub negatives: Vec<i64>,
    }

    impl Partition {
        /// Sum of the accepted values, or the negatives that forbid one
        pub fn total(&self) -> Result<i64, ValidationError> {
            if !self.negatives.is_empty() {
                return Err(ValidationError::new(self.negatives.clone()));
            }
            Ok(self.accepted.iter().fold(0i64, |acc, v| acc.saturating_add(*v)))
        }
    }
}

/// Knobs shared by every stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcParams {
    /// Delimiters available before any header is read
    pub default_delimiters: Vec<String>,
    /// Values strictly above this are left out of the sum
    pub upper_bound: i64,
}

impl Default for CalcParams {
    fn default() -> Self {
        Self {
            default_delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

impl CalcParams {
    /// Same defaults, different upper bound
    pub fn with_upper_bound(upper_bound: i64) -> Self {
        Self {
            upper_bound,
            ..Self::default()
        }
    }

    /// Reject settings no expression could be evaluated under
    pub fn validate(&self) -> Result<()> {
        if self.default_delimiters.iter().any(String::is_empty) {
            return Err(CalcError::ConfigError(
                "default delimiters must not be empty strings".into(),
            ));
        }
        if self.upper_bound < 0 {
            return Err(CalcError::ConfigError(format!(
                "upper bound must not be negative, got {}",
                self.upper_bound
            )));
        }
        Ok(())
    }
}
