use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use lc_config::LifecastConfig;
use lc_models::{ArtifactBundle, BundleFormat, LoadOptions};
use lc_pipeline::InferencePipeline;

use crate::cli::GlobalFlags;

/// Load layered configuration, honouring `--config`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LifecastConfig> {
    if let Some(path) = &flags.config
        && !path.is_file()
    {
        bail!("config file '{}' does not exist", path.display());
    }

    LifecastConfig::load_with_dotenv(flags.config.as_deref()).context("failed to load configuration")
}

/// The bundle path: `--bundle` wins over `artifacts.bundle`.
pub fn bundle_path(flags: &GlobalFlags, config: &LifecastConfig) -> PathBuf {
    flags
        .bundle
        .clone()
        .unwrap_or_else(|| config.artifacts.bundle_path())
}

/// Read and parse the bundle without checking it.
pub async fn read_bundle(path: &Path) -> anyhow::Result<ArtifactBundle> {
    let format = BundleFormat::from_path(path)?;
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read artifact bundle at {}", path.display()))?;
    ArtifactBundle::parse(&text, format)
        .with_context(|| format!("failed to parse artifact bundle at {}", path.display()))
}

/// Load, self-check and wire the artifacts into a ready pipeline.
pub async fn load_pipeline(
    flags: &GlobalFlags,
    config: &LifecastConfig,
) -> anyhow::Result<InferencePipeline> {
    let bounds = config.input.bounds()?;
    let path = bundle_path(flags, config);
    let options = LoadOptions {
        strict_classifier: config.inference.strict_classifier,
    };

    let artifacts = read_bundle(&path)
        .await?
        .into_artifacts(options)
        .with_context(|| format!("artifact bundle at {} failed its self-check", path.display()))?;

    Ok(InferencePipeline::new(bounds, artifacts))
}
