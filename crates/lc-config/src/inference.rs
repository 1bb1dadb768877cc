//! Inference behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InferenceConfig {
    /// Refuse bundles whose stress model is a rounded regressor rather than
    /// a classifier.
    #[serde(default)]
    pub strict_classifier: bool,
}
