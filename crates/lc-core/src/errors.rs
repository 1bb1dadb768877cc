//! Input error types.
//!
//! These are the user-correctable failures: a rejected submission never
//! reaches the scaler or either predictor. Artifact and decoding errors live
//! in `lc-models`, and `lc-pipeline` aggregates both.

use thiserror::Error;

use crate::features::Feature;

/// Errors raised while validating a daily-hours submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A value was NaN or infinite.
    #[error("{feature} must be a finite number of hours")]
    NotFinite { feature: Feature },

    /// A value fell outside the configured per-activity range.
    #[error("{feature} is {value} hours; expected between {min} and {max}")]
    OutOfRange {
        feature: Feature,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The five values together exceed the daily budget.
    #[error("total of {total} hours exceeds the daily budget of {budget} hours")]
    OutOfBudget { total: f64, budget: f64 },
}

impl InputError {
    /// Short machine-readable kind, used in batch output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFinite { .. } => "not_finite",
            Self::OutOfRange { .. } => "out_of_range",
            Self::OutOfBudget { .. } => "out_of_budget",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_feature() {
        let err = InputError::OutOfRange {
            feature: Feature::Sleep,
            value: 13.0,
            min: 0.0,
            max: 12.0,
        };
        assert_eq!(
            err.to_string(),
            "sleep hours is 13 hours; expected between 0 and 12"
        );
        assert_eq!(err.kind(), "out_of_range");
    }

    #[test]
    fn budget_message_carries_total() {
        let err = InputError::OutOfBudget {
            total: 25.0,
            budget: 24.0,
        };
        assert!(err.to_string().contains("25"));
        assert_eq!(err.kind(), "out_of_budget");
    }
}
