//! The container that carries one expression through the stages

use crate::{
    error::{CalcError, Result, ValidationError},
    traits::{Accumulator, Resolver, Tokenizer},
    types::{Partition, Resolved},
    CalcParams,
};
use std::sync::Arc;

/// Everything a stage needs, and everything the stages leave behind
///
/// Lives for a single evaluation. The stage results stay readable after
/// [`crate::Pipeline::execute`] returns, which is what `explain` shows.
/// Negatives do not abort execution: the partition is kept and the
/// [`ValidationError`] is left in [`PipelineContext::rejection`].
pub struct PipelineContext {
    // What we start with
    expression: String,

    // Who does the work
    resolver: Option<Arc<dyn Resolver>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    accumulator: Option<Arc<dyn Accumulator>>,

    // What emerges along the way
    resolved: Option<Resolved>,
    tokens: Option<Vec<String>>,
    partition: Option<Partition>,
    total: Option<i64>,
    rejection: Option<ValidationError>,

    params: CalcParams,
}

impl PipelineContext {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resolver: None,
            tokenizer: None,
            accumulator: None,
            resolved: None,
            tokens: None,
            partition: None,
            total: None,
            rejection: None,
            params: CalcParams::default(),
        }
    }

    // Read what's inside

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resolver(&self) -> Option<Arc<dyn Resolver>> {
        self.resolver.clone()
    }

    pub fn tokenizer(&self) -> Option<Arc<dyn Tokenizer>> {
        self.tokenizer.clone()
    }

    pub fn accumulator(&self) -> Option<Arc<dyn Accumulator>> {
        self.accumulator.clone()
    }

    pub fn resolved(&self) -> Option<&Resolved> {
        self.resolved.as_ref()
    }

    pub fn tokens(&self) -> Option<&[String]> {
        self.tokens.as_deref()
    }

    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    pub fn total(&self) -> Option<i64> {
        self.total
    }

    /// Negatives that kept accumulation from producing a total
    pub fn rejection(&self) -> Option<&ValidationError> {
        self.rejection.as_ref()
    }

    pub fn params(&self) -> &CalcParams {
        &self.params
    }

    /// The sum, or the error [`crate::Pipeline::process`] would have given
    pub fn outcome(&self) -> Result<i64> {
        if let Some(rejection) = &self.rejection {
            return Err(rejection.clone().into());
        }
        self.total
            .ok_or_else(|| CalcError::Pipeline("No total available".into()))
    }

    // Change what's inside

    pub fn set_resolver(&mut self, resolver: Arc<dyn Resolver>) {
        self.resolver = Some(resolver);
    }

    pub fn set_tokenizer(&mut self, tokenizer: Arc<dyn Tokenizer>) {
        self.tokenizer = Some(tokenizer);
    }

    pub fn set_accumulator(&mut self, accumulator: Arc<dyn Accumulator>) {
        self.accumulator = Some(accumulator);
    }

    pub fn set_resolved(&mut self, resolved: Resolved) {
        self.resolved = Some(resolved);
    }

    pub fn set_tokens(&mut self, tokens: Vec<String>) {
        self.tokens = Some(tokens);
    }

    pub fn set_partition(&mut self, partition: Partition) {
        self.partition = Some(partition);
    }

    pub fn set_total(&mut self, total: i64) {
        self.total = Some(total);
    }

    pub fn set_rejection(&mut self, rejection: ValidationError) {
        self.rejection = Some(rejection);
    }

    pub fn set_params(&mut self, params: CalcParams) {
        self.params = params;
    }
}

impl std::fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineContext")
            .field("expression", &self.expression)
            .field("resolved", &self.resolved)
            .field("tokens", &self.tokens)
            .field("partition", &self.partition)
            .field("total", &self.total)
            .field("rejection", &self.rejection)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_prefers_rejection() {
        let mut context = PipelineContext::new("1,-2");
        context.set_rejection(ValidationError::new(vec![-2]));
        let err = context.outcome().err();
        assert_eq!(err.as_ref().and_then(CalcError::negatives), Some(&[-2][..]));
    }

    #[test]
    fn test_outcome_reports_total() {
        let mut context = PipelineContext::new("1,2");
        context.set_total(3);
        assert_eq!(context.outcome().ok(), Some(3));
    }

    #[test]
    fn test_outcome_without_stages_is_a_pipeline_error() {
        let context = PipelineContext::new("1");
        assert!(matches!(context.outcome(), Err(CalcError::Pipeline(_))));
    }
}
