//! Tool configuration.
//!
//! All paths the engine touches hang off a single repository root: the
//! Hardhat template, the registry source files, the generated-project output
//! directory, and the docs tree. The layout is conventional and overridable
//! through an optional `fhegen.toml` at the root.
//!
//! ```toml
//! template_dir = "hardhat-template"
//! generated_dir = "generated"
//! docs_dir = "docs/examples"
//! index_file = "docs/SUMMARY.md"
//! default_category = "Examples"
//! docs_base_url = "https://docs.zama.ai/protocol/examples"
//! registry_file = "examples.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Conventional config filename looked up under the repository root.
pub const CONFIG_FILE: &str = "fhegen.toml";

/// Repository layout and docs settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hardhat template directory, relative to the root.
    pub template_dir: String,
    /// Default parent directory for generated projects, relative to the root.
    pub generated_dir: String,
    /// Directory receiving rendered documentation pages.
    pub docs_dir: String,
    /// The persistent category-grouped index document.
    pub index_file: String,
    /// Header used for the index's default block and for examples that
    /// belong to no category.
    pub default_category: String,
    /// Base URL for the `homepage` field of generated manifests.
    pub docs_base_url: String,
    /// Optional registry TOML overriding the builtin registry.
    pub registry_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: "hardhat-template".to_string(),
            generated_dir: "generated".to_string(),
            docs_dir: "docs/examples".to_string(),
            index_file: "docs/SUMMARY.md".to_string(),
            default_category: "Examples".to_string(),
            docs_base_url: "https://docs.zama.ai/protocol/examples".to_string(),
            registry_file: None,
        }
    }
}

impl Config {
    /// Load configuration from `<root>/fhegen.toml`, falling back to the
    /// defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when the file exists but is not
    /// valid config TOML.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_from(&root.join(CONFIG_FILE))
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when the file exists but is not
    /// valid config TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Serialization(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Absolute template directory for a given root.
    #[must_use]
    pub fn template_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.template_dir)
    }

    /// Default destination for a generated project.
    #[must_use]
    pub fn default_output(&self, root: &Path, id: &str) -> PathBuf {
        root.join(&self.generated_dir).join(id)
    }

    /// Absolute docs directory for a given root.
    #[must_use]
    pub fn docs_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.docs_dir)
    }

    /// Absolute index document path for a given root.
    #[must_use]
    pub fn index_file(&self, root: &Path) -> PathBuf {
        root.join(&self.index_file)
    }

    /// Derived docs URL for a generated manifest's `homepage` field.
    #[must_use]
    pub fn homepage_for(&self, id: &str) -> String {
        format!("{}#{id}", self.docs_base_url)
    }
}
