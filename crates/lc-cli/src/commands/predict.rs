use lc_pipeline::InferencePipeline;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PredictArgs;
use crate::output::output;

/// Handle `lifecast predict`.
pub fn handle(
    args: &PredictArgs,
    pipeline: &InferencePipeline,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let assessment = pipeline.assess(args.hours())?;
    output(&assessment, flags.format)
}
