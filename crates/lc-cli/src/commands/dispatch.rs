use lc_pipeline::runtime;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed inference command to its handler.
///
/// Runs after the pipeline has been installed.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pipeline = runtime::pipeline()?;
    match command {
        Commands::Predict(args) => commands::predict::handle(&args, pipeline, flags),
        Commands::Batch(args) => commands::batch::handle(&args, pipeline, flags).await,
        Commands::Check | Commands::Schema(_) => {
            unreachable!("check/schema are pre-dispatched in main")
        }
    }
}
