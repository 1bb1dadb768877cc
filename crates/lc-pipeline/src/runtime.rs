//! Process-wide pipeline.
//!
//! The pipeline is installed once, after the artifacts have loaded and
//! passed their self-check, and is read-only for the rest of the process.
//! There is no reload or teardown.

use std::sync::OnceLock;

use thiserror::Error;

use crate::pipeline::InferencePipeline;

static PIPELINE: OnceLock<InferencePipeline> = OnceLock::new();

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("inference pipeline is already installed")]
    AlreadyInstalled,

    #[error("inference pipeline has not been installed; load artifacts first")]
    NotInstalled,
}

/// Install the process-wide pipeline.
///
/// # Errors
///
/// Returns [`RuntimeError::AlreadyInstalled`] on a second call.
pub fn install(pipeline: InferencePipeline) -> Result<&'static InferencePipeline, RuntimeError> {
    PIPELINE
        .set(pipeline)
        .map_err(|_| RuntimeError::AlreadyInstalled)?;
    tracing::debug!("inference pipeline installed");
    PIPELINE.get().ok_or(RuntimeError::NotInstalled)
}

/// The installed pipeline.
///
/// # Errors
///
/// Returns [`RuntimeError::NotInstalled`] before [`install`] has succeeded.
pub fn pipeline() -> Result<&'static InferencePipeline, RuntimeError> {
    PIPELINE.get().ok_or(RuntimeError::NotInstalled)
}
