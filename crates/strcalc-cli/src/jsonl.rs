//! Structured I/O: JSON in, JSON out
//!
//! Batch input is one [`Job`] per line; each produces one [`JobResult`]
//! line. `explain --json` prints an [`Explanation`].

use serde::{Deserialize, Serialize};
use strcalc::{CalcError, PipelineContext};

/// One expression to evaluate
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// How to identify this job in the results
    pub id: String,
    /// The expression, newlines and all
    pub expression: String,
}

/// What happened to one job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    /// Job identifier, or `line-N` when the line could not be parsed
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Negative values behind a validation error
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub negatives: Vec<i64>,
}

impl JobResult {
    pub fn success(id: impl Into<String>, total: i64) -> Self {
        Self {
            id: id.into(),
            total: Some(total),
            error: None,
            negatives: Vec::new(),
        }
    }

    pub fn failure(id: impl Into<String>, error: &CalcError) -> Self {
        Self {
            id: id.into(),
            total: None,
            error: Some(error.to_string()),
            negatives: error.negatives().map(<[i64]>::to_vec).unwrap_or_default(),
        }
    }

    pub fn malformed(line_number: usize, reason: impl std::fmt::Display) -> Self {
        Self {
            id: format!("line-{line_number}"),
            total: None,
            error: Some(format!("invalid job: {reason}")),
            negatives: Vec::new(),
        }
    }
}

/// Every intermediate result of one evaluation
#[derive(Debug, Clone, Default, Serialize)]
pub struct Explanation {
    pub expression: String,
    pub has_header: bool,
    pub delimiters: Vec<String>,
    pub body: String,
    pub tokens: Vec<String>,
    pub accepted: Vec<i64>,
    pub ignored: Vec<i64>,
    pub negatives: Vec<i64>,
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&PipelineContext> for Explanation {
    fn from(context: &PipelineContext) -> Self {
        let mut explanation = Explanation {
            expression: context.expression().to_string(),
            total: context.total(),
            error: context.rejection().map(ToString::to_string),
            ..Default::default()
        };
        if let Some(resolved) = context.resolved() {
            explanation.has_header = resolved.has_header;
            explanation.delimiters = resolved.delimiters.iter().cloned().collect();
            explanation.body = resolved.body.clone();
        }
        if let Some(tokens) = context.tokens() {
            explanation.tokens = tokens.to_vec();
        }
        if let Some(partition) = context.partition() {
            explanation.accepted = partition.accepted.clone();
            explanation.ignored = partition.ignored.clone();
            explanation.negatives = partition.negatives.clone();
        }
        explanation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strcalc::ValidationError;

    #[test]
    fn test_job_parses() {
        let job: Job = serde_json::from_str(r#"{"id": "a", "expression": "//;\n1;2"}"#)
            .unwrap_or_else(|e| unreachable!("job failed to parse: {e}"));
        assert_eq!(job.id, "a");
        assert_eq!(job.expression, "//;\n1;2");
    }

    #[test]
    fn test_success_omits_error_fields() {
        let json = serde_json::to_string(&JobResult::success("a", 3)).ok();
        assert_eq!(json.as_deref(), Some(r#"{"id":"a","total":3}"#));
    }

    #[test]
    fn test_failure_lists_negatives() {
        let error = CalcError::from(ValidationError::new(vec![-2, -4]));
        let result = JobResult::failure("b", &error);
        assert_eq!(result.negatives, vec![-2, -4]);
        assert_eq!(result.error.as_deref(), Some("negatives not allowed: -2, -4"));
        assert!(result.total.is_none());
    }

    #[test]
    fn test_malformed_names_the_line() {
        let result = JobResult::malformed(7, "missing field `id`");
        assert_eq!(result.id, "line-7");
        assert!(result.error.is_some_and(|e| e.contains("missing field")));
    }

    #[test]
    fn test_explanation_from_context() {
        let context = strcalc::explain("//[*]\n1*2000,3", strcalc::CalcParams::default())
            .unwrap_or_else(|e| unreachable!("explain failed: {e}"));
        let explanation = Explanation::from(&context);
        assert!(explanation.has_header);
        assert_eq!(explanation.delimiters, vec![",", "\n", "*"]);
        assert_eq!(explanation.tokens, vec!["1", "2000", "3"]);
        assert_eq!(explanation.accepted, vec![1, 3]);
        assert_eq!(explanation.ignored, vec![2000]);
        assert_eq!(explanation.total, Some(4));
        assert!(explanation.negatives.is_empty());
        assert!(explanation.error.is_none());
    }

    #[test]
    fn test_explanation_keeps_negatives() {
        let context = strcalc::explain("1,-2,3000", strcalc::CalcParams::default())
            .unwrap_or_else(|e| unreachable!("explain failed: {e}"));
        let explanation = Explanation::from(&context);
        assert_eq!(explanation.delimiters, vec![",", "\n"]);
        assert_eq!(explanation.tokens, vec!["1", "-2", "3000"]);
        assert_eq!(explanation.accepted, vec![1]);
        assert_eq!(explanation.ignored, vec![3000]);
        assert_eq!(explanation.negatives, vec![-2]);
        assert_eq!(explanation.total, None);
        assert_eq!(explanation.error.as_deref(), Some("negatives not allowed: -2"));
    }
}
