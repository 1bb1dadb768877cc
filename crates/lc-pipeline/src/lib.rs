//! # lc-pipeline
//!
//! The Lifecast request pipeline:
//!
//! ```text
//! DailyHours -> validate -> assemble -> scale -> score model  -> Assessment
//!                                             -> stress model -> decode
//! ```
//!
//! A rejected submission returns before any artifact is touched. Both
//! predictors run exactly once per accepted submission. The artifacts are
//! shared read-only, so any number of threads may run the pipeline at once;
//! [`InferencePipeline::assess_batch`] does exactly that with rayon.

pub mod error;
pub mod pipeline;
pub mod runtime;

pub use error::PipelineError;
pub use pipeline::InferencePipeline;
pub use runtime::RuntimeError;
