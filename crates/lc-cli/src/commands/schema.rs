use lc_core::DailyHours;
use lc_core::responses::Assessment;
use lc_models::ArtifactBundle;
use schemars::schema_for;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `lifecast schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.target)?, flags.format)
}

fn schema(target: SchemaTarget) -> anyhow::Result<Value> {
    let schema = match target {
        SchemaTarget::Bundle => schema_for!(ArtifactBundle),
        SchemaTarget::DailyHours => schema_for!(DailyHours),
        SchemaTarget::Assessment => schema_for!(Assessment),
    };
    Ok(serde_json::to_value(schema)?)
}
