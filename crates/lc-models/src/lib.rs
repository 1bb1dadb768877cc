//! # lc-models
//!
//! Pre-fitted artifacts for Lifecast: the feature scaler, the score
//! regressor, the stress classifier and the stress label encoder.
//!
//! Nothing here fits a model. Parameters come from an artifact bundle
//! produced by the training tooling, and this crate only applies them.
//!
//! ## Bundle
//!
//! A bundle is one JSON or TOML file carrying all four artifacts plus a
//! header (`format_version`, `feature_order`). [`ArtifactBundle::self_check`]
//! refuses bundles with an unsupported version, a feature order that differs
//! from [`lc_core::FEATURE_ORDER`], or malformed parameters.
//!
//! ```no_run
//! use lc_models::{LoadOptions, load_artifacts};
//!
//! let artifacts = load_artifacts("artifacts/bundle.json".as_ref(), LoadOptions::default())
//!     .expect("bundle should load");
//! println!("{artifacts:?}");
//! ```
//!
//! ## Seams
//!
//! The pipeline depends on the [`Transformer`], [`Regressor`], [`Classifier`]
//! and [`LabelDecoder`] traits rather than on the concrete artifact types, so
//! tests can substitute doubles.

pub mod bundle;
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod regressor;
pub mod scaler;
pub mod traits;

pub use bundle::{
    ArtifactBundle, Artifacts, BundleFormat, BundleSummary, CURRENT_FORMAT_VERSION, LoadOptions,
    SUPPORTED_FORMAT_VERSIONS, load_artifacts,
};
pub use classifier::{ClassifierArtifact, LinearClassifier, RoundedRegressor};
pub use encoder::OrdinalEncoder;
pub use error::{ArtifactError, DecodeError};
pub use regressor::{Kernel, LinearRegressor, RegressorArtifact, SvrRegressor};
pub use scaler::StandardScaler;
pub use traits::{Classifier, LabelDecoder, Regressor, Transformer};
