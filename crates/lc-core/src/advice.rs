//! Canned advice for a predicted score and stress label.

use crate::enums::StressLabel;

/// Score at or above which performance counts as excellent.
pub const EXCELLENT_SCORE: f64 = 3.5;

/// Score at or above which performance counts as good.
pub const GOOD_SCORE: f64 = 3.0;

#[must_use]
pub fn score_advice(score: f64) -> &'static str {
    if score >= EXCELLENT_SCORE {
        "Great job! Maintain your study habits and balance."
    } else if score >= GOOD_SCORE {
        "You're doing well. Maybe increase focus time or reduce distractions."
    } else {
        "Consider increasing your study hours and reducing stress to improve performance."
    }
}

#[must_use]
pub const fn stress_advice(label: StressLabel) -> &'static str {
    match label {
        StressLabel::Low => "You're managing stress well. Keep a healthy routine!",
        StressLabel::Moderate => "Moderate stress detected. Consider more breaks and social time.",
        StressLabel::High => {
            "High stress detected! Prioritize sleep, exercise, and seek support if needed."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_thresholds_are_inclusive() {
        assert!(score_advice(3.5).starts_with("Great job"));
        assert!(score_advice(3.0).starts_with("You're doing well"));
        assert!(score_advice(2.99).starts_with("Consider"));
    }

    #[test]
    fn every_label_has_advice() {
        for label in StressLabel::ALL {
            assert!(!stress_advice(label).is_empty());
        }
    }
}
