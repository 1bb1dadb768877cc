//! Daily-hours submissions and their validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::features::{FEATURE_ORDER, Feature};

const fn default_study() -> f64 {
    3.0
}

const fn default_sleep() -> f64 {
    7.0
}

const fn default_social() -> f64 {
    1.5
}

const fn default_one_hour() -> f64 {
    1.0
}

/// An unvalidated submission of hours per day.
///
/// Missing fields take the same defaults the input form starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyHours {
    #[serde(default = "default_study")]
    pub study: f64,
    #[serde(default = "default_sleep")]
    pub sleep: f64,
    #[serde(default = "default_social")]
    pub social: f64,
    #[serde(default = "default_one_hour")]
    pub extracurricular: f64,
    #[serde(default = "default_one_hour")]
    pub physical: f64,
}

impl Default for DailyHours {
    fn default() -> Self {
        Self {
            study: default_study(),
            sleep: default_sleep(),
            social: default_social(),
            extracurricular: default_one_hour(),
            physical: default_one_hour(),
        }
    }
}

impl DailyHours {
    #[must_use]
    pub const fn hours(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Study => self.study,
            Feature::Extracurricular => self.extracurricular,
            Feature::Sleep => self.sleep,
            Feature::Social => self.social,
            Feature::Physical => self.physical,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        FEATURE_ORDER.iter().map(|feature| self.hours(*feature)).sum()
    }
}

/// Domain bounds applied to every submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    /// Lowest accepted value for a single activity.
    pub min_hours: f64,
    /// Highest accepted value for a single activity.
    pub max_hours: f64,
    /// Upper bound on the sum of all activities (inclusive).
    pub daily_budget: f64,
}

impl InputBounds {
    pub const HOURS_IN_DAY: f64 = 24.0;

    /// Slack allowed when comparing a sum of decimal hours with the budget.
    ///
    /// Decimal values such as 7.4 + 5.0 + 8.2 + 2.1 + 1.3 sum to
    /// 24.000000000000004 in binary floating point.
    pub const BUDGET_TOLERANCE: f64 = 1e-9;
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_hours: 0.0,
            max_hours: 12.0,
            daily_budget: Self::HOURS_IN_DAY,
        }
    }
}

/// A submission that passed validation.
///
/// Only [`validate`] constructs this type, so holding one proves every value
/// is finite, in range and within the daily budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInput {
    study: f64,
    sleep: f64,
    social: f64,
    extracurricular: f64,
    physical: f64,
}

impl RawInput {
    #[must_use]
    pub const fn hours(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Study => self.study,
            Feature::Extracurricular => self.extracurricular,
            Feature::Sleep => self.sleep,
            Feature::Social => self.social,
            Feature::Physical => self.physical,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        FEATURE_ORDER.iter().map(|feature| self.hours(*feature)).sum()
    }

    #[must_use]
    pub const fn to_daily_hours(&self) -> DailyHours {
        DailyHours {
            study: self.study,
            sleep: self.sleep,
            social: self.social,
            extracurricular: self.extracurricular,
            physical: self.physical,
        }
    }
}

/// Validate a submission against `bounds`.
///
/// Each value is range-checked in [`FEATURE_ORDER`] before the sum is
/// compared with the daily budget.
///
/// # Errors
///
/// Returns [`InputError::NotFinite`] or [`InputError::OutOfRange`] for the
/// first offending value, or [`InputError::OutOfBudget`] when the total
/// exceeds `bounds.daily_budget`.
pub fn validate(hours: DailyHours, bounds: &InputBounds) -> Result<RawInput, InputError> {
    for feature in FEATURE_ORDER {
        let value = hours.hours(feature);
        if !value.is_finite() {
            return Err(InputError::NotFinite { feature });
        }
        if value < bounds.min_hours || value > bounds.max_hours {
            return Err(InputError::OutOfRange {
                feature,
                value,
                min: bounds.min_hours,
                max: bounds.max_hours,
            });
        }
    }

    let total = hours.total();
    if total > bounds.daily_budget + InputBounds::BUDGET_TOLERANCE {
        return Err(InputError::OutOfBudget {
            total,
            budget: bounds.daily_budget,
        });
    }

    Ok(RawInput {
        study: hours.study,
        sleep: hours.sleep,
        social: hours.social,
        extracurricular: hours.extracurricular,
        physical: hours.physical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_defaults() {
        let hours = DailyHours::default();
        assert!((hours.total() - 13.5).abs() < f64::EPSILON);
        assert!(validate(hours, &InputBounds::default()).is_ok());
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let hours: DailyHours = serde_json::from_str(r#"{"study": 5.0}"#).unwrap();
        assert_eq!(
            hours,
            DailyHours {
                study: 5.0,
                ..DailyHours::default()
            }
        );
    }

    #[test]
    fn nan_is_rejected_before_range_check() {
        let hours = DailyHours {
            social: f64::NAN,
            ..DailyHours::default()
        };
        let err = validate(hours, &InputBounds::default()).unwrap_err();
        assert_eq!(
            err,
            InputError::NotFinite {
                feature: Feature::Social
            }
        );
    }

    #[test]
    fn first_out_of_range_feature_follows_feature_order() {
        // extracurricular precedes sleep in the fitted order
        let hours = DailyHours {
            sleep: 13.0,
            extracurricular: -1.0,
            ..DailyHours::default()
        };
        let err = validate(hours, &InputBounds::default()).unwrap_err();
        assert!(matches!(
            err,
            InputError::OutOfRange {
                feature: Feature::Extracurricular,
                ..
            }
        ));
    }

    #[test]
    fn custom_bounds_are_honoured() {
        let bounds = InputBounds {
            min_hours: 0.0,
            max_hours: 16.0,
            daily_budget: 24.0,
        };
        let hours = DailyHours {
            sleep: 15.0,
            study: 1.0,
            social: 1.0,
            extracurricular: 1.0,
            physical: 1.0,
        };
        let input = validate(hours, &bounds).expect("valid under wider bounds");
        assert!((input.hours(Feature::Sleep) - 15.0).abs() < f64::EPSILON);
    }
}
