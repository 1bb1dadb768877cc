//! Contracts the inference pipeline depends on.
//!
//! Every artifact is read-only after loading and shared across threads, so
//! all four traits require `Send + Sync`.

use lc_core::{FeatureVector, ScaledVector, StressLabel};

use crate::error::DecodeError;

/// A fitted transform applied to features before prediction.
pub trait Transformer: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> ScaledVector;
}

/// A fitted model producing a continuous score.
pub trait Regressor: Send + Sync {
    fn predict(&self, input: &ScaledVector) -> f64;

    /// Artifact kind, for logs and summaries.
    fn kind(&self) -> &'static str;
}

/// A fitted model producing a discrete class code.
pub trait Classifier: Send + Sync {
    fn predict_class(&self, input: &ScaledVector) -> i64;

    /// Artifact kind, for logs and summaries.
    fn kind(&self) -> &'static str;
}

/// A fitted bidirectional mapping between class codes and labels.
pub trait LabelDecoder: Send + Sync {
    /// Map a class code back to its label.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownClassCode`] for codes outside
    /// [`Self::known_codes`]. Implementations must never clamp.
    fn inverse_transform(&self, code: i64) -> Result<StressLabel, DecodeError>;

    /// Map a label to its class code, if the encoder knows it.
    fn transform(&self, label: StressLabel) -> Option<i64>;

    fn known_codes(&self) -> Vec<i64>;
}
