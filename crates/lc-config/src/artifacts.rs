//! Artifact bundle location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_bundle() -> String {
    String::from("artifacts/bundle.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactsConfig {
    /// Path to the artifact bundle (`.json` or `.toml`).
    #[serde(default = "default_bundle")]
    pub bundle: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            bundle: default_bundle(),
        }
    }
}

impl ArtifactsConfig {
    #[must_use]
    pub fn bundle_path(&self) -> PathBuf {
        PathBuf::from(&self.bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundle_path() {
        let config = ArtifactsConfig::default();
        assert_eq!(config.bundle_path(), PathBuf::from("artifacts/bundle.json"));
    }
}
