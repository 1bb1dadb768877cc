//! Artifact and decoding error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or checking an artifact bundle.
///
/// All of these are fatal at startup: a process that cannot load its
/// artifacts must not serve predictions.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The bundle file could not be read.
    #[error("Failed to read artifact bundle {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bundle path has an extension other than `.json` or `.toml`.
    #[error("Unsupported artifact bundle format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// JSON deserialization failed.
    #[error("Failed to parse JSON artifact bundle: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization failed.
    #[error("Failed to parse TOML artifact bundle: {0}")]
    Toml(#[from] toml::de::Error),

    /// `format_version` is not a semantic version.
    #[error("Invalid bundle format version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// `format_version` is outside the supported range.
    #[error("Unsupported bundle format version {found} (supported: {supported})")]
    UnsupportedVersion { found: String, supported: String },

    /// The bundle was fitted with a different feature order.
    #[error("Feature order mismatch: bundle has {found:?}, expected {expected:?}")]
    SchemaMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    /// Parameters are mis-shaped, empty or non-finite.
    #[error("Invalid {artifact} parameters: {reason}")]
    InvalidParameters {
        artifact: &'static str,
        reason: String,
    },

    /// The stress model is a rounded regressor and strict mode is on.
    #[error("Stress model kind 'rounded_regression' is rejected when strict_classifier is enabled")]
    LegacyClassifierRejected,
}

/// Errors raised while decoding a predicted class code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The classifier emitted a code the encoder does not know.
    #[error("Class code {code} is not known to the stress encoder (known codes: 0..{known})")]
    UnknownClassCode { code: i64, known: usize },
}

pub(crate) fn invalid(artifact: &'static str, reason: impl Into<String>) -> ArtifactError {
    ArtifactError::InvalidParameters {
        artifact,
        reason: reason.into(),
    }
}

/// Reject NaN and infinities in fitted parameters.
pub(crate) fn ensure_finite<'a>(
    artifact: &'static str,
    field: &str,
    values: impl IntoIterator<Item = &'a f64>,
) -> Result<(), ArtifactError> {
    if values.into_iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(invalid(artifact, format!("{field} contains a non-finite value")))
    }
}
