//! Error types for strcalc

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Main error type for strcalc
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CalcError {
    /// The negatives behind a validation failure, if that is what this is
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            Self::Validation(err) => Some(err.negatives()),
            _ => None,
        }
    }
}

/// Negative values found in an expression, in the order they appeared
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("negatives not allowed: {}", join_values(.negatives))]
pub struct ValidationError {
    negatives: Vec<i64>,
}

impl ValidationError {
    pub fn new(negatives: Vec<i64>) -> Self {
        Self { negatives }
    }

    pub fn negatives(&self) -> &[i64] {
        &self.negatives
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
