//! Fitted ordinal encoder for stress labels.

use lc_core::StressLabel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, DecodeError, invalid};
use crate::traits::LabelDecoder;

/// Ordered categories; code `i` is `categories[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OrdinalEncoder {
    pub categories: Vec<StressLabel>,
}

impl OrdinalEncoder {
    pub(crate) fn check(&self) -> Result<(), ArtifactError> {
        if self.categories.is_empty() {
            return Err(invalid("stress encoder", "no categories"));
        }
        for (index, label) in self.categories.iter().enumerate() {
            if self.categories[..index].contains(label) {
                return Err(invalid(
                    "stress encoder",
                    format!("category {label} appears more than once"),
                ));
            }
        }
        Ok(())
    }
}

impl LabelDecoder for OrdinalEncoder {
    fn inverse_transform(&self, code: i64) -> Result<StressLabel, DecodeError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.categories.get(index))
            .copied()
            .ok_or(DecodeError::UnknownClassCode {
                code,
                known: self.categories.len(),
            })
    }

    fn transform(&self, label: StressLabel) -> Option<i64> {
        self.categories
            .iter()
            .position(|category| *category == label)
            .and_then(|index| i64::try_from(index).ok())
    }

    fn known_codes(&self) -> Vec<i64> {
        (0..self.categories.len())
            .filter_map(|index| i64::try_from(index).ok())
            .collect()
    }
}
