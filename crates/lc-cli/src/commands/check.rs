use lc_config::LifecastConfig;
use lc_models::{BundleSummary, LoadOptions};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

/// Response from `lifecast check`.
#[derive(Debug, Serialize)]
struct CheckReport {
    bundle: String,
    #[serde(flatten)]
    summary: BundleSummary,
    min_hours: f64,
    max_hours: f64,
    daily_budget: f64,
    strict_classifier: bool,
}

/// Handle `lifecast check`.
///
/// Runs the same load path as every other command, so a bundle that passes
/// here is one the other commands will accept.
pub async fn handle(config: &LifecastConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = bootstrap::bundle_path(flags, config);
    let progress = Progress::spinner(&format!("checking {}", path.display()));

    let bounds = config.input.bounds()?;
    let bundle = bootstrap::read_bundle(&path).await?;
    let summary = bundle.summary();
    let strict_classifier = config.inference.strict_classifier;

    if let Err(error) = bundle.into_artifacts(LoadOptions { strict_classifier }) {
        progress.finish_err("bundle rejected");
        return Err(error.into());
    }
    progress.finish_clear();

    let report = CheckReport {
        bundle: path.display().to_string(),
        summary,
        min_hours: bounds.min_hours,
        max_hours: bounds.max_hours,
        daily_budget: bounds.daily_budget,
        strict_classifier,
    };
    output(&report, flags.format)
}
