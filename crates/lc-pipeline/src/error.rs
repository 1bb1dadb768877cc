//! Pipeline error types.

use lc_core::InputError;
use lc_models::DecodeError;
use thiserror::Error;

/// Errors recoverable at the request boundary.
///
/// Artifact loading errors are not here: they are fatal before any request
/// is handled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The submission was rejected; no predictor was called.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The classifier and encoder disagree about the code space.
    #[error("internal error: {0}")]
    Decode(#[from] DecodeError),

    /// A fitted artifact produced NaN or infinity for a valid submission.
    #[error("internal error: {stage} produced a non-finite value")]
    NonFinite { stage: &'static str },
}

impl PipelineError {
    /// Whether the user can fix this by changing the submission.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// Short machine-readable kind, used in batch output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Input(error) => error.kind(),
            Self::Decode(DecodeError::UnknownClassCode { .. }) => "unknown_class_code",
            Self::NonFinite { .. } => "non_finite_output",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_user_errors() {
        let err = PipelineError::from(InputError::OutOfBudget {
            total: 25.0,
            budget: 24.0,
        });
        assert!(err.is_user_error());
        assert_eq!(err.kind(), "out_of_budget");
    }

    #[test]
    fn decode_errors_are_internal() {
        let err = PipelineError::from(DecodeError::UnknownClassCode { code: 99, known: 3 });
        assert!(!err.is_user_error());
        assert_eq!(err.kind(), "unknown_class_code");
        assert!(err.to_string().starts_with("internal error"));
    }

    #[test]
    fn non_finite_outputs_are_internal() {
        let err = PipelineError::NonFinite { stage: "scaler" };
        assert!(!err.is_user_error());
        assert_eq!(err.kind(), "non_finite_output");
        assert_eq!(
            err.to_string(),
            "internal error: scaler produced a non-finite value"
        );
    }
}
