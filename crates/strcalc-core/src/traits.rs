//! The contracts that bind the stages together
//!
//! Each trait is one role in the pipeline. Swap an implementation and the
//! rest of the pipeline never notices.
//!
//! - [`Stage`] - A step of [`crate::Pipeline::execute`]
//! - [`Resolver`] - Where the delimiter set comes from
//! - [`Tokenizer`] - Where the body becomes tokens
//! - [`Accumulator`] - Where tokens become a sum

use crate::{
    error::Result,
    types::{DelimiterSet, Partition, Resolved},
    CalcParams, PipelineContext,
};

/// One step of the stage-based execution
///
/// ```ignore
/// struct Trim;
///
/// impl Stage for Trim {
///     fn name(&self) -> &'static str {
///         "trim"
///     }
///
///     fn process(&self, context: PipelineContext) -> Result<PipelineContext> {
///         Ok(context)
///     }
/// }
/// ```
pub trait Stage: Send + Sync {
    /// Used in logs and errors
    fn name(&self) -> &'static str;

    /// Take the context, do your part, hand it on
    fn process(&self, context: PipelineContext) -> Result<PipelineContext>;
}

/// Decides which delimiters apply and what text is left to split
pub trait Resolver: Send + Sync {
    fn name(&self) -> &'static str;

    /// Read an optional header off `expression`
    ///
    /// Never fails on a malformed header; the worst case is the defaults.
    fn resolve(&self, expression: &str, params: &CalcParams) -> Result<Resolved>;
}

/// Splits a body into tokens
pub trait Tokenizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Apply every delimiter, returning the flat token list
    ///
    /// With no delimiters the body comes back as the only token.
    fn tokenize(&self, body: &str, delimiters: &DelimiterSet) -> Result<Vec<String>>;
}

/// Turns tokens into a sum
pub trait Accumulator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Parse and sort every token; never fails
    fn partition(&self, tokens: &[String], params: &CalcParams) -> Partition;

    /// Sum the accepted values, refusing if any negative was seen
    fn accumulate(&self, tokens: &[String], params: &CalcParams) -> Result<i64> {
        Ok(self.partition(tokens, params).total()?)
    }
}
