//! Fitted classifiers for the stress class code.

use lc_core::{FEATURE_COUNT, ScaledVector};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, ensure_finite, invalid};
use crate::regressor::{RegressorArtifact, dot};
use crate::traits::{Classifier, Regressor};

/// Linear decision functions, one row per class (or a single row for a
/// binary problem), emitting the code of the highest-scoring class.
///
/// Ties go to the earlier row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LinearClassifier {
    pub coef: Vec<[f64; FEATURE_COUNT]>,
    pub intercept: Vec<f64>,
    /// Class code emitted for each row (for the binary form: negative, positive).
    pub classes: Vec<i64>,
}

impl LinearClassifier {
    fn check(&self) -> Result<(), ArtifactError> {
        if self.coef.is_empty() {
            return Err(invalid("linear classifier", "no decision rows"));
        }
        if self.coef.len() != self.intercept.len() {
            return Err(invalid(
                "linear classifier",
                format!(
                    "{} coefficient rows but {} intercepts",
                    self.coef.len(),
                    self.intercept.len()
                ),
            ));
        }
        let expected_classes = if self.coef.len() == 1 { 2 } else { self.coef.len() };
        if self.classes.len() != expected_classes {
            return Err(invalid(
                "linear classifier",
                format!(
                    "{} decision rows need {expected_classes} classes, found {}",
                    self.coef.len(),
                    self.classes.len()
                ),
            ));
        }
        ensure_finite("linear classifier", "coef", self.coef.iter().flatten())?;
        ensure_finite("linear classifier", "intercept", &self.intercept)
    }

    fn decision(&self, row: usize, input: &ScaledVector) -> f64 {
        dot(&self.coef[row], input.values()) + self.intercept[row]
    }
}

impl Classifier for LinearClassifier {
    fn predict_class(&self, input: &ScaledVector) -> i64 {
        if self.coef.len() == 1 {
            let positive = self.decision(0, input) > 0.0;
            return self.classes[usize::from(positive)];
        }

        let mut best = 0;
        let mut best_score = self.decision(0, input);
        for row in 1..self.coef.len() {
            let score = self.decision(row, input);
            if score > best_score {
                best = row;
                best_score = score;
            }
        }
        self.classes[best]
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

/// Legacy stress model: a regressor fitted on ordinal codes whose output is
/// rounded to the nearest code.
///
/// Rounding is half-to-even, so 0.5 maps to 0 and 1.5 maps to 2. Outputs near
/// a .5 boundary are ambiguous, which is why bundles should ship a real
/// classifier instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoundedRegressor {
    pub model: RegressorArtifact,
}

impl Classifier for RoundedRegressor {
    #[allow(clippy::cast_possible_truncation)]
    fn predict_class(&self, input: &ScaledVector) -> i64 {
        let value = self.model.predict(input);
        if !value.is_finite() {
            // `NaN as i64` is 0, a real class. No encoder knows i64::MIN.
            tracing::error!(value, "rounded regressor produced a non-finite output");
            return i64::MIN;
        }
        // Saturating cast; anything past i64 is unknown to the encoder anyway.
        value.round_ties_even() as i64
    }

    fn kind(&self) -> &'static str {
        "rounded_regression"
    }
}

/// Serialized classifier, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Linear(LinearClassifier),
    RoundedRegression(RoundedRegressor),
}

impl ClassifierArtifact {
    pub(crate) fn check(&self) -> Result<(), ArtifactError> {
        match self {
            Self::Linear(model) => model.check(),
            Self::RoundedRegression(model) => model.model.check(),
        }
    }

    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::RoundedRegression(_))
    }
}

impl Classifier for ClassifierArtifact {
    fn predict_class(&self, input: &ScaledVector) -> i64 {
        match self {
            Self::Linear(model) => model.predict_class(input),
            Self::RoundedRegression(model) => model.predict_class(input),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Linear(model) => model.kind(),
            Self::RoundedRegression(model) => model.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regressor::LinearRegressor;

    fn three_class() -> LinearClassifier {
        // Row scores reduce to: x0, x1, x2 respectively.
        LinearClassifier {
            coef: vec![
                [1.0, 0.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0, 0.0],
            ],
            intercept: vec![0.0, 0.0, 0.0],
            classes: vec![0, 1, 2],
        }
    }

    fn constant_regressor(value: f64) -> RoundedRegressor {
        RoundedRegressor {
            model: RegressorArtifact::Linear(LinearRegressor {
                coef: [0.0; FEATURE_COUNT],
                intercept: value,
            }),
        }
    }

    #[test]
    fn multiclass_picks_highest_row() {
        let model = three_class();
        assert_eq!(model.predict_class(&ScaledVector([0.1, 0.9, 0.3, 0.0, 0.0])), 1);
        assert_eq!(model.predict_class(&ScaledVector([0.1, 0.2, 0.3, 0.0, 0.0])), 2);
    }

    #[test]
    fn ties_go_to_first_row() {
        let model = three_class();
        assert_eq!(model.predict_class(&ScaledVector([0.5, 0.5, 0.5, 0.0, 0.0])), 0);
    }

    #[test]
    fn binary_form_uses_sign() {
        let model = LinearClassifier {
            coef: vec![[1.0, 0.0, 0.0, 0.0, 0.0]],
            intercept: vec![-0.5],
            classes: vec![0, 2],
        };
        assert!(model.check().is_ok());
        assert_eq!(model.predict_class(&ScaledVector([1.0, 0.0, 0.0, 0.0, 0.0])), 2);
        assert_eq!(model.predict_class(&ScaledVector([0.0, 0.0, 0.0, 0.0, 0.0])), 0);
    }

    #[test]
    fn class_count_must_match_rows() {
        let mut model = three_class();
        model.classes.pop();
        assert!(model.check().is_err());
    }

    #[test]
    fn rounding_is_half_to_even() {
        let input = ScaledVector([0.0; FEATURE_COUNT]);
        assert_eq!(constant_regressor(0.5).predict_class(&input), 0);
        assert_eq!(constant_regressor(1.5).predict_class(&input), 2);
        assert_eq!(constant_regressor(1.49).predict_class(&input), 1);
        assert_eq!(constant_regressor(-0.7).predict_class(&input), -1);
    }

    #[test]
    fn non_finite_output_never_becomes_a_known_code() {
        let input = ScaledVector([0.0; FEATURE_COUNT]);
        assert_eq!(constant_regressor(f64::NAN).predict_class(&input), i64::MIN);
        assert_eq!(constant_regressor(f64::INFINITY).predict_class(&input), i64::MIN);

        let exploding = RoundedRegressor {
            model: RegressorArtifact::Linear(LinearRegressor {
                coef: [0.0; FEATURE_COUNT],
                intercept: 2.0,
            }),
        };
        let nan_input = ScaledVector([f64::INFINITY, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(exploding.predict_class(&nan_input), i64::MIN);
    }

    #[test]
    fn legacy_kind_is_flagged() {
        let artifact = ClassifierArtifact::RoundedRegression(constant_regressor(1.0));
        assert!(artifact.is_legacy());
        assert_eq!(artifact.kind(), "rounded_regression");
        assert!(!ClassifierArtifact::Linear(three_class()).is_legacy());
    }
}
