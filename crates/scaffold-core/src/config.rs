//! Engine configuration.
//!
//! Read from `scaffold.toml` in the project directory (or an explicit path).
//! Every key is optional; missing keys fall back to the conventional Spring
//! layout.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "scaffold.toml";

/// Layout conventions and write behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Java source root, relative to a project root.
    pub source_root: String,
    /// Resources root, relative to a project root.
    pub resources_root: String,
    /// Class name suffix of the namespace anchor (`*Application.java`).
    pub anchor_suffix: String,
    /// Package used for generated tests when the source declares none.
    pub fallback_package: String,
    /// Directory, relative to the output root, that receives generated tests.
    pub generated_tests_dir: String,
    /// Stage feature artifacts and rename them into place all at once.
    pub atomic_writes: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_root: "src/main/java".to_string(),
            resources_root: "src/main/resources".to_string(),
            anchor_suffix: "Application".to_string(),
            fallback_package: "com.generated".to_string(),
            generated_tests_dir: "generated-tests".to_string(),
            atomic_writes: false,
        }
    }
}

impl ScaffoldConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> ScaffoldResult<Self> {
        toml::from_str(text).map_err(|e| ScaffoldError::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ScaffoldError::fs(path, e))?;
        Self::from_toml(&text)
    }

    /// Load `scaffold.toml` from `dir` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> ScaffoldResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading scaffold config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
