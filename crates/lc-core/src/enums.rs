//! Ordinal stress labels.
//!
//! The variants are the closed label set; which integer code maps to which
//! label is decided by the fitted encoder artifact, not by this enum.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum StressLabel {
    Low,
    Moderate,
    High,
}

impl StressLabel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for StressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
