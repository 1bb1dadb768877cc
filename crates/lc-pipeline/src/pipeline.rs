//! The request pipeline: validate, assemble, scale, predict, decode.

use std::sync::Arc;

use lc_core::responses::{Assessment, PredictionResult};
use lc_core::{DailyHours, InputBounds, RawInput, ScaledVector, StressLabel, assemble, validate};
use lc_models::{Artifacts, DecodeError};
use rayon::prelude::*;

use crate::error::PipelineError;

/// Stateless per-request pipeline over a shared, read-only artifact set.
///
/// Cloning is cheap; every clone shares the same artifacts.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    bounds: InputBounds,
    artifacts: Arc<Artifacts>,
}

impl InferencePipeline {
    #[must_use]
    pub fn new(bounds: InputBounds, artifacts: Artifacts) -> Self {
        Self {
            bounds,
            artifacts: Arc::new(artifacts),
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> &InputBounds {
        &self.bounds
    }

    #[must_use]
    pub fn artifacts(&self) -> &Artifacts {
        &self.artifacts
    }

    /// Scale a validated input and run both predictors once each.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NonFinite`] when the scaler or the score
    /// model yields NaN or infinity. Neither predictor runs on a non-finite
    /// scaled vector.
    pub fn predict(&self, input: &RawInput) -> Result<PredictionResult, PipelineError> {
        let features = assemble(input);
        let scaled = self.artifacts.scaler.transform(&features);
        if !scaled.values().iter().all(|value| value.is_finite()) {
            return Err(non_finite("scaler", &scaled));
        }

        let score = self.artifacts.score_model.predict(&scaled);
        let stress_code = self.artifacts.stress_model.predict_class(&scaled);
        tracing::debug!(?features, ?scaled, score, stress_code, "prediction");
        if !score.is_finite() {
            return Err(non_finite("score model", &scaled));
        }
        Ok(PredictionResult { score, stress_code })
    }

    /// Map a predicted class code to its label.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownClassCode`] when the encoder does not
    /// know the code.
    pub fn decode(&self, code: i64) -> Result<StressLabel, DecodeError> {
        self.artifacts.stress_encoder.inverse_transform(code)
    }

    /// Run the whole chain for one submission.
    ///
    /// Validation failures return before the scaler or either predictor is
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Input`] for rejected submissions,
    /// [`PipelineError::NonFinite`] when an artifact yields NaN or infinity,
    /// and [`PipelineError::Decode`] when the classifier emits a code the
    /// encoder does not know.
    pub fn assess(&self, hours: DailyHours) -> Result<Assessment, PipelineError> {
        let input = validate(hours, &self.bounds).inspect_err(|error| {
            tracing::warn!(%error, "submission rejected");
        })?;

        let prediction = self.predict(&input)?;
        let stress_level = self.decode(prediction.stress_code).inspect_err(|error| {
            tracing::error!(
                %error,
                code = prediction.stress_code,
                known = ?self.artifacts.stress_encoder.known_codes(),
                "stress classifier and encoder disagree"
            );
        })?;

        Ok(Assessment::new(&input, prediction.score, stress_level))
    }

    /// Assess many submissions in parallel, preserving input order.
    #[must_use]
    pub fn assess_batch(&self, submissions: &[DailyHours]) -> Vec<Result<Assessment, PipelineError>> {
        submissions
            .par_iter()
            .map(|hours| self.assess(*hours))
            .collect()
    }
}

fn non_finite(stage: &'static str, scaled: &ScaledVector) -> PipelineError {
    tracing::error!(stage, ?scaled, "artifact produced a non-finite value");
    PipelineError::NonFinite { stage }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use lc_core::{FeatureVector, InputError};
    use lc_models::{Classifier, LabelDecoder, OrdinalEncoder, Regressor, Transformer};

    use super::*;

    #[derive(Default)]
    struct Calls {
        scale: AtomicUsize,
        score: AtomicUsize,
        classify: AtomicUsize,
    }

    struct Identity(Arc<Calls>);

    impl Transformer for Identity {
        fn transform(&self, features: &FeatureVector) -> ScaledVector {
            self.0.scale.fetch_add(1, Ordering::SeqCst);
            ScaledVector(features.0)
        }
    }

    /// Returns the first scaled value, which is study hours.
    struct FirstValue(Arc<Calls>);

    impl Regressor for FirstValue {
        fn predict(&self, input: &ScaledVector) -> f64 {
            self.0.score.fetch_add(1, Ordering::SeqCst);
            input.0[0]
        }

        fn kind(&self) -> &'static str {
            "first_value"
        }
    }

    struct Fixed(Arc<Calls>, i64);

    impl Classifier for Fixed {
        fn predict_class(&self, _input: &ScaledVector) -> i64 {
            self.0.classify.fetch_add(1, Ordering::SeqCst);
            self.1
        }

        fn kind(&self) -> &'static str {
            "fixed"
        }
    }

    fn pipeline_with(code: i64) -> (InferencePipeline, Arc<Calls>) {
        let calls = Arc::new(Calls::default());
        let artifacts = Artifacts {
            scaler: Arc::new(Identity(Arc::clone(&calls))),
            score_model: Arc::new(FirstValue(Arc::clone(&calls))),
            stress_model: Arc::new(Fixed(Arc::clone(&calls), code)),
            stress_encoder: Arc::new(OrdinalEncoder {
                categories: vec![StressLabel::Low, StressLabel::Moderate, StressLabel::High],
            }),
        };
        (InferencePipeline::new(InputBounds::default(), artifacts), calls)
    }

    #[test]
    fn valid_submission_calls_each_stage_once() {
        let (pipeline, calls) = pipeline_with(2);
        let assessment = pipeline.assess(DailyHours::default()).expect("should assess");

        assert!((assessment.score - 3.0).abs() < f64::EPSILON);
        assert_eq!(assessment.stress_level, StressLabel::High);
        assert_eq!(calls.scale.load(Ordering::SeqCst), 1);
        assert_eq!(calls.score.load(Ordering::SeqCst), 1);
        assert_eq!(calls.classify.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn over_budget_never_reaches_predictors() {
        let (pipeline, calls) = pipeline_with(0);
        let hours = DailyHours {
            study: 12.0,
            sleep: 8.0,
            social: 3.0,
            extracurricular: 1.0,
            physical: 1.0,
        };

        let err = pipeline.assess(hours).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Input(InputError::OutOfBudget { .. })
        ));
        assert_eq!(calls.scale.load(Ordering::SeqCst), 0);
        assert_eq!(calls.score.load(Ordering::SeqCst), 0);
        assert_eq!(calls.classify.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_finite_scaling_stops_before_predictors() {
        struct Overflow;

        impl Transformer for Overflow {
            fn transform(&self, features: &FeatureVector) -> ScaledVector {
                ScaledVector(features.0.map(|value| value / 1e-310))
            }
        }

        let (pipeline, calls) = pipeline_with(0);
        let mut artifacts = pipeline.artifacts().clone();
        artifacts.scaler = Arc::new(Overflow);
        let pipeline = InferencePipeline::new(InputBounds::default(), artifacts);

        let err = pipeline.assess(DailyHours::default()).unwrap_err();
        assert_eq!(err, PipelineError::NonFinite { stage: "scaler" });
        assert_eq!(calls.score.load(Ordering::SeqCst), 0);
        assert_eq!(calls.classify.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_finite_score_is_an_internal_error() {
        let (pipeline, _calls) = pipeline_with(1);
        let mut artifacts = pipeline.artifacts().clone();
        artifacts.score_model = Arc::new(lc_models::LinearRegressor {
            coef: [f64::MAX, f64::MAX, 0.0, 0.0, 0.0],
            intercept: 0.0,
        });
        let pipeline = InferencePipeline::new(InputBounds::default(), artifacts);

        let err = pipeline.assess(DailyHours::default()).unwrap_err();
        assert_eq!(err, PipelineError::NonFinite { stage: "score model" });
        assert!(!err.is_user_error());
    }

    #[test]
    fn unknown_code_is_an_internal_error() {
        let (pipeline, _calls) = pipeline_with(99);
        let err = pipeline.assess(DailyHours::default()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Decode(DecodeError::UnknownClassCode { code: 99, known: 3 })
        );
        assert!(!err.is_user_error());
    }

    #[test]
    fn predict_feeds_features_in_fitted_order() {
        let (pipeline, _calls) = pipeline_with(0);
        let input = validate(
            DailyHours {
                study: 4.5,
                ..DailyHours::default()
            },
            pipeline.bounds(),
        )
        .unwrap();
        let prediction = pipeline.predict(&input).expect("finite prediction");
        assert!((prediction.score - 4.5).abs() < f64::EPSILON);
        assert_eq!(prediction.stress_code, 0);
    }

    #[test]
    fn batch_preserves_order_and_isolates_failures() {
        let (pipeline, calls) = pipeline_with(1);
        let submissions = vec![
            DailyHours::default(),
            DailyHours {
                sleep: 20.0,
                ..DailyHours::default()
            },
            DailyHours {
                study: 6.0,
                ..DailyHours::default()
            },
        ];

        let results = pipeline.assess_batch(&submissions);
        assert_eq!(results.len(), 3);
        assert!((results[0].as_ref().unwrap().score - 3.0).abs() < f64::EPSILON);
        assert!(results[1].is_err());
        assert!((results[2].as_ref().unwrap().score - 6.0).abs() < f64::EPSILON);
        assert_eq!(calls.classify.load(Ordering::SeqCst), 2);
        assert_eq!(
            pipeline.artifacts().stress_encoder.known_codes(),
            vec![0, 1, 2]
        );
    }
}
