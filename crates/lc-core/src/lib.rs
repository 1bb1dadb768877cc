//! # lc-core
//!
//! Core types for Lifecast.
//!
//! This crate provides the foundational types shared across all Lifecast crates:
//! - Daily-hours submissions and their validation against [`InputBounds`]
//! - The fixed feature order and the feature vectors built from it
//! - The ordinal [`StressLabel`] set
//! - Advice lookup tables
//! - CLI response types
//! - Input error types

pub mod advice;
pub mod enums;
pub mod errors;
pub mod features;
pub mod input;
pub mod responses;

pub use enums::StressLabel;
pub use errors::InputError;
pub use features::{FEATURE_COUNT, FEATURE_ORDER, Feature, FeatureVector, ScaledVector, assemble};
pub use input::{DailyHours, InputBounds, RawInput, validate};
