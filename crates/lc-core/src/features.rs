//! Feature order and feature vectors.
//!
//! The scaler and both predictors were fitted on columns in one specific
//! order. Nothing in a fitted artifact records which position means what, so
//! a reordering here would produce wrong predictions with no error. The order
//! lives in [`FEATURE_ORDER`] and nowhere else; artifact bundles carry the
//! matching column names so the loader can compare them at startup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::RawInput;

/// Number of model features.
pub const FEATURE_COUNT: usize = 5;

/// A daily activity measured in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Study,
    Extracurricular,
    Sleep,
    Social,
    Physical,
}

/// Column order the artifacts were fitted with.
pub const FEATURE_ORDER: [Feature; FEATURE_COUNT] = [
    Feature::Study,
    Feature::Extracurricular,
    Feature::Sleep,
    Feature::Social,
    Feature::Physical,
];

impl Feature {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Extracurricular => "extracurricular",
            Self::Sleep => "sleep",
            Self::Social => "social",
            Self::Physical => "physical",
        }
    }

    /// Column name in the training data, recorded in artifact bundles.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Study => "Study_Hours_Per_Day",
            Self::Extracurricular => "Extracurricular_Hours_Per_Day",
            Self::Sleep => "Sleep_Hours_Per_Day",
            Self::Social => "Social_Hours_Per_Day",
            Self::Physical => "Physical_Activity_Hours_Per_Day",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Study => "study hours",
            Self::Extracurricular => "extracurricular hours",
            Self::Sleep => "sleep hours",
            Self::Social => "social hours",
            Self::Physical => "physical activity hours",
        }
    }

    /// Column names in [`FEATURE_ORDER`].
    #[must_use]
    pub fn column_names() -> [&'static str; FEATURE_COUNT] {
        FEATURE_ORDER.map(Self::column_name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Unscaled model input in [`FEATURE_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    #[must_use]
    pub const fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// Model input after the fitted scaler has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledVector(pub [f64; FEATURE_COUNT]);

impl ScaledVector {
    #[must_use]
    pub const fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// Place validated hours into [`FEATURE_ORDER`].
#[must_use]
pub fn assemble(input: &RawInput) -> FeatureVector {
    FeatureVector(FEATURE_ORDER.map(|feature| input.hours(feature)))
}
