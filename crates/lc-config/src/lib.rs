//! # lc-config
//!
//! Layered configuration loading for Lifecast using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LIFECAST_*` prefix, `__` as separator)
//! 2. An explicit TOML file (the CLI's `--config` flag)
//! 3. Project-level `.lifecast/config.toml`
//! 4. User-level `~/.config/lifecast/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LIFECAST_INPUT__MAX_HOURS` -> `input.max_hours`,
//! `LIFECAST_ARTIFACTS__BUNDLE` -> `artifacts.bundle`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lc_config::LifecastConfig;
//!
//! let config = LifecastConfig::load_with_dotenv(None).expect("config");
//! let bounds = config.input.bounds().expect("bounds");
//! println!("bundle: {}", config.artifacts.bundle);
//! ```

mod artifacts;
mod error;
mod inference;
mod input;

pub use artifacts::ArtifactsConfig;
pub use error::ConfigError;
pub use inference::InferenceConfig;
pub use input::InputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LifecastConfig {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl LifecastConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(extra).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lifecast/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file (existence is checked by the caller)
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("LIFECAST_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lifecast").join("config.toml"))
    }
}
