//! The engine that drives an expression through three stages to a sum

// this_file: crates/strcalc-core/src/pipeline.rs

use crate::{
    context::PipelineContext,
    error::{CalcError, Result},
    traits::{Accumulator, Resolver, Stage, Tokenizer},
    CalcParams,
};
use std::sync::Arc;

/// Pipeline for evaluation: Resolve → Tokenize → Accumulate
///
/// ## `process()` - Direct Backend Execution (Recommended)
/// Chains the three backends and returns the sum.
///
/// ## `execute()` - Stage-Based Execution
/// Runs a [`PipelineContext`] through the stages, leaving every
/// intermediate result on it. Use this to see how a sum came about.
/// Negatives do not fail `execute`; they land in
/// [`PipelineContext::rejection`] next to the partition that found them.
///
/// ```ignore
/// let pipeline = Pipeline::builder()
///     .resolver(Arc::new(HeaderResolver::new()))
///     .tokenizer(Arc::new(SequentialSplitter::new()))
///     .accumulator(Arc::new(BoundedAccumulator::new()))
///     .build()?;
///
/// assert_eq!(pipeline.process("//;\n1;2")?, 3);
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    resolver: Option<Arc<dyn Resolver>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    accumulator: Option<Arc<dyn Accumulator>>,
    params: CalcParams,
}

impl Pipeline {
    /// Start building a new pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Evaluate one expression
    pub fn process(&self, expression: &str) -> Result<i64> {
        let resolver = self
            .resolver
            .as_ref()
            .ok_or_else(|| CalcError::ConfigError("No resolver configured".into()))?;
        let tokenizer = self
            .tokenizer
            .as_ref()
            .ok_or_else(|| CalcError::ConfigError("No tokenizer configured".into()))?;
        let accumulator = self
            .accumulator
            .as_ref()
            .ok_or_else(|| CalcError::ConfigError("No accumulator configured".into()))?;

        // Resolve → Tokenize → Accumulate
        let resolved = resolver.resolve(expression, &self.params)?;
        let tokens = tokenizer.tokenize(&resolved.body, &resolved.delimiters)?;
        accumulator.accumulate(&tokens, &self.params)
    }

    /// Run the stages over a prepared context
    pub fn execute(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        if let Some(resolver) = &self.resolver {
            context.set_resolver(resolver.clone());
        }
        if let Some(tokenizer) = &self.tokenizer {
            context.set_tokenizer(tokenizer.clone());
        }
        if let Some(accumulator) = &self.accumulator {
            context.set_accumulator(accumulator.clone());
        }
        context.set_params(self.params.clone());

        for stage in &self.stages {
            log::debug!("Executing stage: {}", stage.name());
            context = stage.process(context)?;
        }

        Ok(context)
    }
}

/// Assemble a pipeline piece by piece
///
/// ```ignore
/// let pipeline = Pipeline::builder()
///     .resolver(resolver)
///     .tokenizer(tokenizer)
///     .accumulator(accumulator)
///     .params(CalcParams::with_upper_bound(500))
///     .build()?;
/// ```
pub struct PipelineBuilder {
    stages: Vec<Box<dyn Stage>>,
    resolver: Option<Arc<dyn Resolver>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    accumulator: Option<Arc<dyn Accumulator>>,
    params: CalcParams,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            resolver: None,
            tokenizer: None,
            accumulator: None,
            params: CalcParams::default(),
        }
    }

    /// Add your own stage; any custom stage replaces the default three
    pub fn stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn accumulator(mut self, accumulator: Arc<dyn Accumulator>) -> Self {
        self.accumulator = Some(accumulator);
        self
    }

    pub fn params(mut self, params: CalcParams) -> Self {
        self.params = params;
        self
    }

    /// Check the params and create the pipeline
    pub fn build(self) -> Result<Pipeline> {
        self.params.validate()?;

        let stages = if self.stages.is_empty() {
            vec![
                Box::new(ResolutionStage) as Box<dyn Stage>,
                Box::new(TokenizationStage) as Box<dyn Stage>,
                Box::new(AccumulationStage) as Box<dyn Stage>,
            ]
        } else {
            self.stages
        };

        Ok(Pipeline {
            stages,
            resolver: self.resolver,
            tokenizer: self.tokenizer,
            accumulator: self.accumulator,
            params: self.params,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ResolutionStage;
impl Stage for ResolutionStage {
    fn name(&self) -> &'static str {
        "Resolution"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        let resolver = context
            .resolver()
            .ok_or_else(|| CalcError::Pipeline("No resolver configured".into()))?;

        log::debug!("Resolving delimiters with backend: {}", resolver.name());
        let resolved = resolver.resolve(context.expression(), context.params())?;
        log::trace!(
            "Resolved {} delimiters (header: {})",
            resolved.delimiters.len(),
            resolved.has_header
        );

        context.set_resolved(resolved);
        Ok(context)
    }
}

struct TokenizationStage;
impl Stage for TokenizationStage {
    fn name(&self) -> &'static str {
        "Tokenization"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        let tokenizer = context
            .tokenizer()
            .ok_or_else(|| CalcError::Pipeline("No tokenizer configured".into()))?;

        let resolved = context
            .resolved()
            .ok_or_else(|| CalcError::Pipeline("No resolved delimiters available".into()))?;

        log::debug!("Tokenizing with backend: {}", tokenizer.name());
        let tokens = tokenizer.tokenize(&resolved.body, &resolved.delimiters)?;
        log::trace!("Produced {} tokens", tokens.len());

        context.set_tokens(tokens);
        Ok(context)
    }
}

struct AccumulationStage;
impl Stage for AccumulationStage {
    fn name(&self) -> &'static str {
        "Accumulation"
    }

    fn process(&self, mut context: PipelineContext) -> Result<PipelineContext> {
        let accumulator = context
            .accumulator()
            .ok_or_else(|| CalcError::Pipeline("No accumulator configured".into()))?;

        let tokens = context
            .tokens()
            .ok_or_else(|| CalcError::Pipeline("No tokens available".into()))?;

        log::debug!("Accumulating with backend: {}", accumulator.name());
        let partition = accumulator.partition(tokens, context.params());
        let total = partition.total();
        context.set_partition(partition);

        match total {
            Ok(total) => context.set_total(total),
            Err(rejection) => {
                log::debug!("Accumulation rejected: {rejection}");
                context.set_rejection(rejection);
            },
        }
        Ok(context)
    }
}
