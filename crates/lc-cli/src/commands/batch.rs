use std::io;
use std::path::Path;

use anyhow::Context;
use lc_core::DailyHours;
use lc_core::responses::BatchRecord;
use lc_pipeline::InferencePipeline;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BatchArgs;
use crate::output::to_ndjson;
use crate::progress::Progress;

/// Handle `lifecast batch`.
///
/// Output is NDJSON whatever `--format` says. A bad line becomes a
/// `{line, kind, error}` record and the batch carries on.
pub async fn handle(
    args: &BatchArgs,
    pipeline: &'static InferencePipeline,
    _flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = args.file.clone();
    let progress = Progress::spinner(&format!("reading {}", path.display()));

    let lines = tokio::task::spawn_blocking(move || read_lines(&path))
        .await
        .context("batch reader panicked")??;

    progress.set_message(&format!("assessing {} submissions", lines.len()));
    let records = tokio::task::spawn_blocking(move || assess_lines(pipeline, lines))
        .await
        .context("batch evaluation panicked")?;
    progress.finish_clear();

    let failed = records.iter().filter(|record| !record.is_ok()).count();
    tracing::info!(total = records.len(), failed, "batch complete");

    print!("{}", to_ndjson(&records)?);
    Ok(())
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<io::Result<DailyHours>>> {
    let lines = serde_jsonlines::json_lines(path)
        .with_context(|| format!("failed to open batch file {}", path.display()))?;
    Ok(lines.collect())
}

/// Parse failures keep their slot; everything that parsed is assessed in
/// one parallel pass and merged back by line number.
fn assess_lines(pipeline: &InferencePipeline, lines: Vec<io::Result<DailyHours>>) -> Vec<BatchRecord> {
    let mut parsed = Vec::with_capacity(lines.len());
    let mut records: Vec<Option<BatchRecord>> = Vec::with_capacity(lines.len());

    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        match line {
            Ok(hours) => {
                parsed.push((number, hours));
                records.push(None);
            }
            Err(error) => {
                tracing::warn!(line = number, %error, "unparseable batch line");
                records.push(Some(BatchRecord::Failed {
                    line: number,
                    kind: String::from("parse"),
                    error: error.to_string(),
                }));
            }
        }
    }

    let submissions: Vec<DailyHours> = parsed.iter().map(|(_, hours)| *hours).collect();
    let results = pipeline.assess_batch(&submissions);

    for ((number, _), result) in parsed.into_iter().zip(results) {
        records[number - 1] = Some(match result {
            Ok(assessment) => BatchRecord::Ok {
                line: number,
                assessment,
            },
            Err(error) => BatchRecord::Failed {
                line: number,
                kind: error.kind().to_string(),
                error: error.to_string(),
            },
        });
    }

    records.into_iter().flatten().collect()
}
