//! Response types returned as JSON by `lifecast` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::advice::{score_advice, stress_advice};
use crate::enums::StressLabel;
use crate::input::{DailyHours, RawInput};

/// Raw output of the predictor pair for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub score: f64,
    pub stress_code: i64,
}

/// Response from `lifecast predict`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Assessment {
    pub hours: DailyHours,
    pub total_hours: f64,
    pub score: f64,
    /// Score rounded to two decimals for display.
    pub score_display: String,
    pub stress_level: StressLabel,
    pub score_advice: String,
    pub stress_advice: String,
}

impl Assessment {
    #[must_use]
    pub fn new(input: &RawInput, score: f64, stress_level: StressLabel) -> Self {
        Self {
            hours: input.to_daily_hours(),
            total_hours: input.total(),
            score,
            score_display: format!("{score:.2}"),
            stress_level,
            score_advice: score_advice(score).to_string(),
            stress_advice: stress_advice(stress_level).to_string(),
        }
    }
}

/// One line of `lifecast batch` output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum BatchRecord {
    Ok {
        line: usize,
        assessment: Assessment,
    },
    Failed {
        line: usize,
        kind: String,
        error: String,
    },
}

impl BatchRecord {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Ok { line, .. } | Self::Failed { line, .. } => *line,
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}
