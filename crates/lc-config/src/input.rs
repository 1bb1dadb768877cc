//! Input bounds configuration.

use lc_core::InputBounds;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_min_hours() -> f64 {
    0.0
}

const fn default_max_hours() -> f64 {
    12.0
}

const fn default_daily_budget() -> f64 {
    InputBounds::HOURS_IN_DAY
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_min_hours")]
    pub min_hours: f64,

    #[serde(default = "default_max_hours")]
    pub max_hours: f64,

    /// Maximum accepted sum of all five activities.
    #[serde(default = "default_daily_budget")]
    pub daily_budget: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_hours: default_min_hours(),
            max_hours: default_max_hours(),
            daily_budget: default_daily_budget(),
        }
    }
}

impl InputConfig {
    /// Convert to [`InputBounds`], rejecting inconsistent values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a bound is not finite, the
    /// minimum is negative or above the maximum, or the budget is not positive.
    pub fn bounds(&self) -> Result<InputBounds, ConfigError> {
        for (field, value) in [
            ("input.min_hours", self.min_hours),
            ("input.max_hours", self.max_hours),
            ("input.daily_budget", self.daily_budget),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not a finite number")));
            }
        }

        if self.min_hours < 0.0 {
            return Err(invalid(
                "input.min_hours",
                format!("{} is negative", self.min_hours),
            ));
        }
        if self.min_hours > self.max_hours {
            return Err(invalid(
                "input.min_hours",
                format!(
                    "{} is greater than max_hours {}",
                    self.min_hours, self.max_hours
                ),
            ));
        }
        if self.daily_budget <= 0.0 {
            return Err(invalid(
                "input.daily_budget",
                format!("{} must be positive", self.daily_budget),
            ));
        }

        Ok(InputBounds {
            min_hours: self.min_hours,
            max_hours: self.max_hours,
            daily_budget: self.daily_budget,
        })
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_default_bounds() {
        let bounds = InputConfig::default().bounds().expect("defaults are valid");
        assert_eq!(bounds, InputBounds::default());
    }

    #[test]
    fn min_above_max_is_rejected() {
        let config = InputConfig {
            min_hours: 5.0,
            max_hours: 4.0,
            ..InputConfig::default()
        };
        let err = config.bounds().unwrap_err();
        assert!(err.to_string().contains("input.min_hours"));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let config = InputConfig {
            daily_budget: 0.0,
            ..InputConfig::default()
        };
        assert!(matches!(
            config.bounds(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "input.daily_budget"
        ));
    }

    #[test]
    fn infinite_max_is_rejected() {
        let config = InputConfig {
            max_hours: f64::INFINITY,
            ..InputConfig::default()
        };
        assert!(config.bounds().is_err());
    }
}
