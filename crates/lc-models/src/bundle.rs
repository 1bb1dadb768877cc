//! Artifact bundle loading and the startup self-check.

use std::path::Path;
use std::sync::Arc;

use lc_core::{Feature, StressLabel};
use schemars::JsonSchema;
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierArtifact;
use crate::encoder::OrdinalEncoder;
use crate::error::ArtifactError;
use crate::regressor::RegressorArtifact;
use crate::scaler::StandardScaler;
use crate::traits::{Classifier, LabelDecoder, Regressor, Transformer};

/// Format version written by current tooling.
pub const CURRENT_FORMAT_VERSION: &str = "1.0.0";

/// Format versions this loader understands.
pub const SUPPORTED_FORMAT_VERSIONS: &str = "^1";

/// On-disk encoding of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFormat {
    Json,
    Toml,
}

impl BundleFormat {
    /// Pick the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::UnsupportedFormat`] for anything other than
    /// `.json` or `.toml`.
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ArtifactError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Options applied while turning a bundle into live artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject rounded-regression stress models.
    pub strict_classifier: bool,
}

/// All fitted artifacts plus the schema header they were fitted against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArtifactBundle {
    /// Semantic version of the bundle layout.
    pub format_version: String,
    /// Training column names, in the order the artifacts were fitted with.
    pub feature_order: Vec<String>,
    pub scaler: StandardScaler,
    pub score_model: RegressorArtifact,
    pub stress_model: ClassifierArtifact,
    pub stress_encoder: OrdinalEncoder,
}

impl ArtifactBundle {
    /// Parse bundle text in the given format. Does not run the self-check.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Json`] or [`ArtifactError::Toml`] when the
    /// text does not deserialize.
    pub fn parse(text: &str, format: BundleFormat) -> Result<Self, ArtifactError> {
        match format {
            BundleFormat::Json => Ok(serde_json::from_str(text)?),
            BundleFormat::Toml => Ok(toml::from_str(text)?),
        }
    }

    /// Read and parse a bundle file. Does not run the self-check.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Io`] if the file cannot be read, plus any
    /// error from [`Self::parse`].
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let format = BundleFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, format)
    }

    /// Verify the header and every artifact's parameters.
    ///
    /// # Errors
    ///
    /// - [`ArtifactError::InvalidVersion`] / [`ArtifactError::UnsupportedVersion`]
    ///   when `format_version` is not a supported semantic version
    /// - [`ArtifactError::SchemaMismatch`] when `feature_order` differs from
    ///   the pipeline's fitted order
    /// - [`ArtifactError::InvalidParameters`] for mis-shaped or non-finite
    ///   parameters
    pub fn self_check(&self) -> Result<(), ArtifactError> {
        let version =
            Version::parse(&self.format_version).map_err(|e| ArtifactError::InvalidVersion {
                version: self.format_version.clone(),
                reason: e.to_string(),
            })?;
        let supported = VersionReq::parse(SUPPORTED_FORMAT_VERSIONS).map_err(|e| {
            ArtifactError::InvalidVersion {
                version: SUPPORTED_FORMAT_VERSIONS.to_string(),
                reason: e.to_string(),
            }
        })?;
        if !supported.matches(&version) {
            return Err(ArtifactError::UnsupportedVersion {
                found: version.to_string(),
                supported: SUPPORTED_FORMAT_VERSIONS.to_string(),
            });
        }

        let expected = Feature::column_names();
        if self.feature_order.iter().map(String::as_str).ne(expected) {
            return Err(ArtifactError::SchemaMismatch {
                found: self.feature_order.clone(),
                expected: expected.iter().map(ToString::to_string).collect(),
            });
        }

        self.scaler.check()?;
        self.score_model.check()?;
        self.stress_model.check()?;
        self.stress_encoder.check()
    }

    #[must_use]
    pub fn summary(&self) -> BundleSummary {
        BundleSummary {
            format_version: self.format_version.clone(),
            feature_order: self.feature_order.clone(),
            score_model: self.score_model.kind().to_string(),
            stress_model: self.stress_model.kind().to_string(),
            legacy_classifier: self.stress_model.is_legacy(),
            stress_categories: self.stress_encoder.categories.clone(),
        }
    }

    /// Self-check the bundle and convert it into shareable artifacts.
    ///
    /// # Errors
    ///
    /// Any [`Self::self_check`] error, or
    /// [`ArtifactError::LegacyClassifierRejected`] when the stress model is a
    /// rounded regressor and `options.strict_classifier` is set.
    pub fn into_artifacts(self, options: LoadOptions) -> Result<Artifacts, ArtifactError> {
        self.self_check()?;

        if self.stress_model.is_legacy() {
            if options.strict_classifier {
                return Err(ArtifactError::LegacyClassifierRejected);
            }
            tracing::warn!(
                "stress model is a rounded regressor; predictions near .5 boundaries are ambiguous"
            );
        }

        tracing::info!(
            format_version = %self.format_version,
            score_model = self.score_model.kind(),
            stress_model = self.stress_model.kind(),
            categories = self.stress_encoder.categories.len(),
            "artifact bundle loaded"
        );

        Ok(Artifacts {
            scaler: Arc::new(self.scaler),
            score_model: Arc::new(self.score_model),
            stress_model: Arc::new(self.stress_model),
            stress_encoder: Arc::new(self.stress_encoder),
        })
    }
}

/// Read, check and convert a bundle file in one step.
///
/// # Errors
///
/// See [`ArtifactBundle::from_path`] and [`ArtifactBundle::into_artifacts`].
pub fn load_artifacts(path: &Path, options: LoadOptions) -> Result<Artifacts, ArtifactError> {
    tracing::debug!(path = %path.display(), "loading artifact bundle");
    ArtifactBundle::from_path(path)?.into_artifacts(options)
}

/// Human-facing description of a loaded bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BundleSummary {
    pub format_version: String,
    pub feature_order: Vec<String>,
    pub score_model: String,
    pub stress_model: String,
    pub legacy_classifier: bool,
    pub stress_categories: Vec<StressLabel>,
}

/// The read-only artifact set shared by every request.
#[derive(Clone)]
pub struct Artifacts {
    pub scaler: Arc<dyn Transformer>,
    pub score_model: Arc<dyn Regressor>,
    pub stress_model: Arc<dyn Classifier>,
    pub stress_encoder: Arc<dyn LabelDecoder>,
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("score_model", &self.score_model.kind())
            .field("stress_model", &self.stress_model.kind())
            .field("stress_codes", &self.stress_encoder.known_codes())
            .finish_non_exhaustive()
    }
}
