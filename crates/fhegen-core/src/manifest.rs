//! `package.json` patching for generated projects.
//!
//! Only `name`, `description`, and `homepage` are rewritten, plus an optional
//! merge into `dependencies` for category projects. Every other field is
//! preserved verbatim, including key order (`serde_json` is built with
//! `preserve_order` for exactly this reason), so a generated manifest diffs
//! cleanly against the template's.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// Fields written into a generated project's manifest.
#[derive(Debug, Clone)]
pub struct ManifestPatch {
    /// New package name, e.g. `fhevm-example-fhe-counter`.
    pub name: String,
    /// Descriptor-supplied description.
    pub description: String,
    /// Derived documentation URL.
    pub homepage: String,
    /// Extra dependencies merged into the template's `dependencies` map.
    /// The map itself is never replaced; per-key conflicts take these values.
    pub extra_dependencies: BTreeMap<String, String>,
}

/// Apply a patch to the `package.json` under `project`.
///
/// # Errors
///
/// Returns [`Error::ManifestParse`] when the manifest is missing, is not
/// valid JSON, or its top level is not an object.
pub fn patch_manifest(project: &Path, patch: &ManifestPatch) -> Result<()> {
    let path = project.join("package.json");
    let content = fs::read_to_string(&path)
        .map_err(|e| Error::ManifestParse(format!("cannot read {}: {e}", path.display())))?;
    let mut manifest: Value = serde_json::from_str(&content)
        .map_err(|e| Error::ManifestParse(format!("{}: {e}", path.display())))?;

    let Some(root) = manifest.as_object_mut() else {
        return Err(Error::ManifestParse(format!(
            "{}: top level is not an object",
            path.display()
        )));
    };

    root.insert("name".to_string(), Value::String(patch.name.clone()));
    root.insert(
        "description".to_string(),
        Value::String(patch.description.clone()),
    );
    root.insert("homepage".to_string(), Value::String(patch.homepage.clone()));

    if !patch.extra_dependencies.is_empty() {
        let deps = root
            .entry("dependencies".to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        let Some(deps) = deps.as_object_mut() else {
            return Err(Error::ManifestParse(format!(
                "{}: 'dependencies' is not an object",
                path.display()
            )));
        };
        for (package, version) in &patch.extra_dependencies {
            deps.insert(package.clone(), Value::String(version.clone()));
        }
    }

    debug!(name = %patch.name, "patching manifest");
    let mut serialized = serde_json::to_string_pretty(&manifest)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    serialized.push('\n');
    fs::write(&path, serialized)?;
    Ok(())
}
