use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use lc_core::DailyHours;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Predict GPA and stress level for one day.
    Predict(PredictArgs),
    /// Assess every line of a JSONL file of daily hours.
    Batch(BatchArgs),
    /// Load and self-check the artifact bundle.
    Check,
    /// Print the JSON Schema of a document type.
    Schema(SchemaArgs),
}

/// Arguments for `lifecast predict`.
#[derive(Clone, Debug, Args)]
pub struct PredictArgs {
    /// Hours spent studying
    #[arg(long, default_value_t = 3.0)]
    pub study: f64,

    /// Hours spent on extracurricular activities
    #[arg(long, default_value_t = 1.0)]
    pub extracurricular: f64,

    /// Hours of sleep
    #[arg(long, default_value_t = 7.0)]
    pub sleep: f64,

    /// Hours spent socialising
    #[arg(long, default_value_t = 1.5)]
    pub social: f64,

    /// Hours of physical activity
    #[arg(long, default_value_t = 1.0)]
    pub physical: f64,
}

impl PredictArgs {
    #[must_use]
    pub const fn hours(&self) -> DailyHours {
        DailyHours {
            study: self.study,
            sleep: self.sleep,
            social: self.social,
            extracurricular: self.extracurricular,
            physical: self.physical,
        }
    }
}

/// Arguments for `lifecast batch`.
#[derive(Clone, Debug, Args)]
pub struct BatchArgs {
    /// JSONL file with one daily-hours object per line
    pub file: PathBuf,
}

/// Arguments for `lifecast schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document type to describe
    #[arg(value_enum)]
    pub target: SchemaTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Bundle,
    DailyHours,
    Assessment,
}
