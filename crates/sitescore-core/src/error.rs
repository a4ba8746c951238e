use thiserror::Error;

use crate::normalize::Criterion;

/// Validation failures raised by the aggregator. None are transient: every
/// variant indicates bad caller input and should surface unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("weights must sum to 1.0, got {sum}")]
    InvalidWeightSum { sum: f64 },

    #[error("weight {criterion} must be between 0 and 1, got {value}")]
    WeightOutOfRange { criterion: Criterion, value: f64 },

    #[error("required metric {field} is missing")]
    MissingMetric { field: &'static str },
}
