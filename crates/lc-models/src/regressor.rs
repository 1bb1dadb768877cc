//! Fitted regression models for the numeric score.

use lc_core::{FEATURE_COUNT, ScaledVector};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, ensure_finite, invalid};
use crate::traits::Regressor;

/// `coef · x + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LinearRegressor {
    pub coef: [f64; FEATURE_COUNT],
    pub intercept: f64,
}

impl LinearRegressor {
    fn check(&self) -> Result<(), ArtifactError> {
        ensure_finite("linear regressor", "coef", &self.coef)?;
        ensure_finite("linear regressor", "intercept", [&self.intercept])
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, input: &ScaledVector) -> f64 {
        dot(&self.coef, input.values()) + self.intercept
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

/// Kernel function of a support vector machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    /// `<x, y>`
    Linear,
    /// `exp(-gamma * |x - y|^2)`
    Rbf { gamma: f64 },
    /// `(gamma * <x, y> + coef0)^degree`
    Poly {
        gamma: f64,
        #[serde(default)]
        coef0: f64,
        #[serde(default = "default_degree")]
        degree: u32,
    },
    /// `tanh(gamma * <x, y> + coef0)`
    Sigmoid {
        gamma: f64,
        #[serde(default)]
        coef0: f64,
    },
}

const fn default_degree() -> u32 {
    3
}

impl Kernel {
    #[must_use]
    pub fn apply(&self, x: &[f64; FEATURE_COUNT], y: &[f64; FEATURE_COUNT]) -> f64 {
        match *self {
            Self::Linear => dot(x, y),
            Self::Rbf { gamma } => {
                let distance: f64 = x.iter().zip(y).map(|(a, b)| (a - b) * (a - b)).sum();
                (-gamma * distance).exp()
            }
            Self::Poly {
                gamma,
                coef0,
                degree,
            } => {
                let base = gamma.mul_add(dot(x, y), coef0);
                base.powi(i32::try_from(degree).unwrap_or(i32::MAX))
            }
            Self::Sigmoid { gamma, coef0 } => gamma.mul_add(dot(x, y), coef0).tanh(),
        }
    }

    fn check(&self) -> Result<(), ArtifactError> {
        let (gamma, coef0) = match *self {
            Self::Linear => return Ok(()),
            Self::Rbf { gamma } => (gamma, 0.0),
            Self::Poly { gamma, coef0, .. } | Self::Sigmoid { gamma, coef0 } => (gamma, coef0),
        };
        ensure_finite("svr kernel", "gamma/coef0", [&gamma, &coef0])?;
        if gamma <= 0.0 {
            return Err(invalid("svr kernel", "gamma must be positive"));
        }
        Ok(())
    }
}

/// Epsilon-support vector regression in dual form:
/// `sum_i dual_coef[i] * K(support_vectors[i], x) + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SvrRegressor {
    pub kernel: Kernel,
    pub support_vectors: Vec<[f64; FEATURE_COUNT]>,
    pub dual_coef: Vec<f64>,
    pub intercept: f64,
}

impl SvrRegressor {
    fn check(&self) -> Result<(), ArtifactError> {
        self.kernel.check()?;
        if self.support_vectors.is_empty() {
            return Err(invalid("svr", "no support vectors"));
        }
        if self.support_vectors.len() != self.dual_coef.len() {
            return Err(invalid(
                "svr",
                format!(
                    "{} support vectors but {} dual coefficients",
                    self.support_vectors.len(),
                    self.dual_coef.len()
                ),
            ));
        }
        ensure_finite("svr", "support_vectors", self.support_vectors.iter().flatten())?;
        ensure_finite("svr", "dual_coef", &self.dual_coef)?;
        ensure_finite("svr", "intercept", [&self.intercept])
    }
}

impl Regressor for SvrRegressor {
    fn predict(&self, input: &ScaledVector) -> f64 {
        self.support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(vector, coef)| coef * self.kernel.apply(vector, input.values()))
            .sum::<f64>()
            + self.intercept
    }

    fn kind(&self) -> &'static str {
        "svr"
    }
}

/// Serialized regressor, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorArtifact {
    Linear(LinearRegressor),
    Svr(SvrRegressor),
}

impl RegressorArtifact {
    pub(crate) fn check(&self) -> Result<(), ArtifactError> {
        match self {
            Self::Linear(model) => model.check(),
            Self::Svr(model) => model.check(),
        }
    }
}

impl Regressor for RegressorArtifact {
    fn predict(&self, input: &ScaledVector) -> f64 {
        match self {
            Self::Linear(model) => model.predict(input),
            Self::Svr(model) => model.predict(input),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Linear(model) => model.kind(),
            Self::Svr(model) => model.kind(),
        }
    }
}

pub(crate) fn dot(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: [f64; FEATURE_COUNT] = [0.0; FEATURE_COUNT];
    const ONES: [f64; FEATURE_COUNT] = [1.0; FEATURE_COUNT];

    #[test]
    fn linear_regressor_is_affine() {
        let model = LinearRegressor {
            coef: [1.0, 2.0, 3.0, 4.0, 5.0],
            intercept: 0.5,
        };
        let score = model.predict(&ScaledVector(ONES));
        assert!((score - 15.5).abs() < 1e-12);
        assert_eq!(model.kind(), "linear");
    }

    #[test]
    fn rbf_kernel_is_one_at_zero_distance() {
        let kernel = Kernel::Rbf { gamma: 0.3 };
        assert!((kernel.apply(&ONES, &ONES) - 1.0).abs() < 1e-12);
        // |ones - origin|^2 = 5
        let expected = (-0.3_f64 * 5.0).exp();
        assert!((kernel.apply(&ONES, &ORIGIN) - expected).abs() < 1e-12);
    }

    #[test]
    fn poly_and_sigmoid_kernels() {
        let poly = Kernel::Poly {
            gamma: 0.5,
            coef0: 1.0,
            degree: 2,
        };
        // (0.5 * 5 + 1)^2
        assert!((poly.apply(&ONES, &ONES) - 12.25).abs() < 1e-12);

        let sigmoid = Kernel::Sigmoid {
            gamma: 0.1,
            coef0: 0.0,
        };
        assert!((sigmoid.apply(&ONES, &ONES) - 0.5_f64.tanh()).abs() < 1e-12);
    }

    #[test]
    fn svr_sums_weighted_kernels() {
        let model = SvrRegressor {
            kernel: Kernel::Linear,
            support_vectors: vec![ONES, [1.0, 0.0, 0.0, 0.0, 0.0]],
            dual_coef: vec![0.5, -1.0],
            intercept: 2.0,
        };
        // 0.5 * 5 - 1.0 * 1 + 2
        let score = model.predict(&ScaledVector(ONES));
        assert!((score - 3.5).abs() < 1e-12);
    }

    #[test]
    fn svr_rejects_mismatched_coefficients() {
        let model = SvrRegressor {
            kernel: Kernel::Rbf { gamma: 0.1 },
            support_vectors: vec![ONES],
            dual_coef: vec![1.0, 2.0],
            intercept: 0.0,
        };
        assert!(model.check().is_err());
    }

    #[test]
    fn kernel_rejects_non_positive_gamma() {
        assert!(Kernel::Rbf { gamma: 0.0 }.check().is_err());
        assert!(Kernel::Linear.check().is_ok());
    }

    #[test]
    fn artifact_deserializes_by_kind() {
        let json = r#"{
            "kind": "svr",
            "kernel": {"type": "poly", "gamma": 0.2},
            "support_vectors": [[0, 0, 0, 0, 0]],
            "dual_coef": [1.0],
            "intercept": 3.0
        }"#;
        let artifact: RegressorArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.kind(), "svr");
        match artifact {
            RegressorArtifact::Svr(SvrRegressor {
                kernel: Kernel::Poly { coef0, degree, .. },
                ..
            }) => {
                assert!(coef0.abs() < f64::EPSILON);
                assert_eq!(degree, 3);
            }
            other => panic!("unexpected artifact {other:?}"),
        }
    }
}
