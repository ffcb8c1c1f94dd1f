//! strcalc: sum a delimited string of numbers
//!
//! ```
//! assert_eq!(strcalc::add("1\n2,3").ok(), Some(6));
//! assert_eq!(strcalc::add("//[*][%]\n1*2%3").ok(), Some(6));
//! assert_eq!(strcalc::add("2,1001").ok(), Some(2));
//!
//! let err = strcalc::add("1,-2,3,-4").unwrap_err();
//! assert_eq!(err.to_string(), "negatives not allowed: -2, -4");
//! ```
//!
//! [`add`] runs the default pipeline: [`HeaderResolver`] →
//! [`SequentialSplitter`] → [`BoundedAccumulator`]. Build your own with
//! [`Pipeline::builder`] to swap any of them or change [`CalcParams`].

pub mod accumulator;
pub mod resolver;
pub mod tokenizer;

use std::sync::Arc;

pub use accumulator::{parse_loose, BoundedAccumulator};
pub use resolver::HeaderResolver;
pub use strcalc_core::{
    traits, types, CalcParams, Pipeline, PipelineBuilder, PipelineContext,
    DEFAULT_DELIMITERS, DEFAULT_UPPER_BOUND,
};
pub use tokenizer::{split_all, SequentialSplitter};

pub mod error {
    pub use strcalc_core::error::*;
}

pub use error::{CalcError, Result, ValidationError};

/// Builder preloaded with the canonical three backends
pub fn default_builder() -> PipelineBuilder {
    Pipeline::builder()
        .resolver(Arc::new(HeaderResolver::new()))
        .tokenizer(Arc::new(SequentialSplitter::new()))
        .accumulator(Arc::new(BoundedAccumulator::new()))
}

/// The canonical pipeline with the given params
pub fn pipeline_with(params: CalcParams) -> Result<Pipeline> {
    default_builder().params(params).build()
}

/// The canonical pipeline with default params
pub fn default_pipeline() -> Result<Pipeline> {
    default_builder().build()
}

/// Sum the numbers in `expression`
///
/// Fails only when the expression holds negative numbers; the error lists
/// all of them.
pub fn add(expression: &str) -> Result<i64> {
    default_pipeline()?.process(expression)
}

/// Run every stage and keep the intermediate results
pub fn explain(expression: &str, params: CalcParams) -> Result<PipelineContext> {
    pipeline_with(params)?.execute(PipelineContext::new(expression))
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_matches_pipeline_process() {
        let pipeline = match default_pipeline() {
            Ok(pipeline) => pipeline,
            Err(e) => unreachable!("pipeline build failed: {e}"),
        };
        for expression in ["", "1,5,3", "//;\n1;2", "2,1001"] {
            assert_eq!(add(expression).ok(), pipeline.process(expression).ok());
        }
    }

    #[test]
    fn test_explain_keeps_every_stage() {
        let context = match explain("//[*][%]\n1*2%3000", CalcParams::default()) {
            Ok(context) => context,
            Err(e) => unreachable!("explain failed: {e}"),
        };

        let resolved = context.resolved().map(|r| r.body.clone());
        assert_eq!(resolved.as_deref(), Some("1*2%3000"));
        assert_eq!(context.tokens().map(<[String]>::len), Some(3));
        assert_eq!(context.partition().map(|p| p.ignored.clone()), Some(vec![3000]));
        assert_eq!(context.total(), Some(3));
    }

    #[test]
    fn test_explain_keeps_breakdown_when_negatives_found() {
        let context = match explain("1,-2,3000", CalcParams::default()) {
            Ok(context) => context,
            Err(e) => unreachable!("explain failed: {e}"),
        };

        assert_eq!(context.tokens().map(<[String]>::len), Some(3));
        let partition = context.partition().cloned().unwrap_or_default();
        assert_eq!(partition.accepted, vec![1]);
        assert_eq!(partition.ignored, vec![3000]);
        assert_eq!(partition.negatives, vec![-2]);
        assert_eq!(context.total(), None);
        assert_eq!(
            context.rejection().map(ToString::to_string).as_deref(),
            Some("negatives not allowed: -2")
        );
        assert_eq!(context.outcome().ok(), add("1,-2,3000").ok());
    }

    #[test]
    fn test_pipeline_with_rejects_bad_params() {
        let result = pipeline_with(CalcParams::with_upper_bound(-1));
        assert!(matches!(result, Err(CalcError::ConfigError(_))));
    }
}
