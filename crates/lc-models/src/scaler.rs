//! Fitted standardisation transform.

use lc_core::{FEATURE_COUNT, FeatureVector, ScaledVector};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, ensure_finite, invalid};
use crate::traits::Transformer;

/// Per-feature `(x - mean) / scale`, with parameters fitted at training time.
///
/// A zero `scale` marks a constant feature during fitting and is applied as
/// 1, so such a feature is only centred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StandardScaler {
    pub mean: [f64; FEATURE_COUNT],
    pub scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub(crate) fn check(&self) -> Result<(), ArtifactError> {
        ensure_finite("scaler", "mean", &self.mean)?;
        ensure_finite("scaler", "scale", &self.scale)?;
        if self.scale.iter().any(|scale| *scale < 0.0) {
            return Err(invalid("scaler", "scale must not be negative"));
        }
        // Dividing by a subnormal scale overflows to infinity.
        if self
            .scale
            .iter()
            .any(|scale| *scale != 0.0 && !scale.is_normal())
        {
            return Err(invalid("scaler", "scale must be zero or a normal number"));
        }
        Ok(())
    }
}

impl Transformer for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> ScaledVector {
        let values = features.values();
        ScaledVector(std::array::from_fn(|i| {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            (values[i] - self.mean[i]) / scale
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            mean: [2.0, 1.0, 8.0, 2.0, 4.0],
            scale: [2.0, 0.5, 1.0, 0.0, 4.0],
        }
    }

    #[test]
    fn standardises_each_feature() {
        let scaled = scaler().transform(&FeatureVector([4.0, 2.0, 6.0, 3.0, 0.0]));
        assert_eq!(scaled.0, [1.0, 2.0, -2.0, 1.0, -1.0]);
    }

    #[test]
    fn rejects_negative_scale() {
        let mut bad = scaler();
        bad.scale[2] = -1.0;
        assert!(bad.check().is_err());
    }

    #[test]
    fn rejects_subnormal_scale() {
        let mut bad = scaler();
        bad.scale[0] = 1e-310;
        assert!(bad.check().is_err());

        let mut constant = scaler();
        constant.scale[0] = 0.0;
        assert!(constant.check().is_ok());
    }

    #[test]
    fn rejects_non_finite_mean() {
        let mut bad = scaler();
        bad.mean[0] = f64::NAN;
        assert!(bad.check().is_err());
    }

    #[test]
    fn wrong_length_fails_to_deserialize() {
        let json = r#"{"mean": [1, 2, 3, 4], "scale": [1, 1, 1, 1, 1]}"#;
        assert!(serde_json::from_str::<StandardScaler>(json).is_err());
    }
}
