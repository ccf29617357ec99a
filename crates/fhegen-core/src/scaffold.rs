//! Project scaffolding.
//!
//! Turns a registry descriptor into a standalone, ready-to-build Hardhat
//! project: clone the template, reset its placeholder contract and test,
//! populate with the descriptor's files, then patch the deploy script and
//! manifest. The single-example variant is fail-fast (all preconditions are
//! checked before the first write); the category variant tolerates missing
//! sources per item, skipping them with a warning.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::deploy::{DeployTags, write_deploy_script};
use crate::manifest::{ManifestPatch, patch_manifest};
use crate::naming::{camel_case, extract_contract_name};
use crate::registry::{CategoryDescriptor, ExampleDescriptor};
use crate::template::clone_template;
use crate::{Error, Result};

/// Contract directory inside a generated project.
const CONTRACTS_DIR: &str = "contracts";
/// Test directory inside a generated project.
const TEST_DIR: &str = "test";
/// Per-contract Hardhat task directory inside the template.
const TASKS_DIR: &str = "tasks";

/// Scaffolds standalone projects from registry descriptors.
///
/// Holds the repository root and layout configuration; descriptor paths are
/// resolved against the root.
pub struct Scaffolder {
    root: PathBuf,
    config: Config,
}

impl Scaffolder {
    /// Create a scaffolder for a repository root and configuration.
    #[must_use]
    pub fn new(root: &Path, config: Config) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Generate a standalone project for a single example.
    ///
    /// Returns the canonical contract identifier extracted from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceNotFound`] before any filesystem mutation when
    /// a descriptor file is missing, [`Error::DestinationExists`] when the
    /// destination is taken, and [`Error::NameExtraction`] when the source
    /// declares no contract.
    pub fn generate_example(
        &self,
        descriptor: &ExampleDescriptor,
        destination: &Path,
    ) -> Result<String> {
        let source = self.require_file(&descriptor.source_path)?;
        let test = self.require_file(&descriptor.test_path)?;
        let fixture = descriptor
            .fixture_path
            .as_deref()
            .map(|p| self.require_file(p))
            .transpose()?;
        let auxiliary = descriptor
            .auxiliary_paths
            .iter()
            .map(|p| self.require_file(p))
            .collect::<Result<Vec<_>>>()?;

        clone_template(&self.config.template_dir(&self.root), destination)?;

        let source_text = fs::read_to_string(&source)?;
        let identifier = extract_contract_name(&source_text, &source)?;
        info!(example = %descriptor.id, contract = %identifier, "scaffolding example");

        let placeholder = self.template_placeholder(destination);

        let contracts = destination.join(CONTRACTS_DIR);
        clear_files_with_extension(&contracts, "sol")?;
        fs::copy(&source, contracts.join(format!("{identifier}.sol")))?;

        let tests = destination.join(TEST_DIR);
        clear_files_with_extension(&tests, "ts")?;
        copy_under_basename(&test, &tests)?;
        if let Some(fixture) = fixture {
            copy_under_basename(&fixture, &tests)?;
        }
        for aux in &auxiliary {
            copy_under_basename(aux, &tests)?;
        }

        write_deploy_script(destination, &[identifier.clone()], DeployTags::Single)?;

        patch_manifest(
            destination,
            &ManifestPatch {
                name: format!("fhevm-example-{}", descriptor.id),
                description: descriptor.description.clone(),
                homepage: self.config.homepage_for(&descriptor.id),
                extra_dependencies: std::collections::BTreeMap::new(),
            },
        )?;

        if let Some(placeholder) = placeholder {
            rewrite_task_file(destination, &placeholder, &identifier)?;
        }

        Ok(identifier)
    }

    /// Generate a combined project for a whole category.
    ///
    /// Descriptors whose source file is missing are skipped with a warning
    /// and excluded from the deploy script; everything else about a skipped
    /// descriptor is ignored. Returns the identifiers of the contracts that
    /// were actually copied, in registry order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DestinationExists`] when the destination is taken,
    /// and [`Error::NameExtraction`] when a present source declares no
    /// contract.
    pub fn generate_category(
        &self,
        category: &CategoryDescriptor,
        destination: &Path,
    ) -> Result<Vec<String>> {
        clone_template(&self.config.template_dir(&self.root), destination)?;

        let placeholder = self.template_placeholder(destination);

        let contracts = destination.join(CONTRACTS_DIR);
        let tests = destination.join(TEST_DIR);
        clear_files_with_extension(&contracts, "sol")?;
        clear_files_with_extension(&tests, "ts")?;

        let mut identifiers = Vec::new();
        let mut copied: HashSet<String> = HashSet::new();

        for descriptor in &category.examples {
            let source = self.root.join(&descriptor.source_path);
            if !source.is_file() {
                warn!(
                    example = %descriptor.id,
                    source = %source.display(),
                    "source file missing, skipping example"
                );
                continue;
            }

            let source_text = fs::read_to_string(&source)?;
            let identifier = extract_contract_name(&source_text, &source)?;
            fs::copy(&source, contracts.join(format!("{identifier}.sol")))?;
            debug!(example = %descriptor.id, contract = %identifier, "copied contract");

            let mut companions = vec![descriptor.test_path.clone()];
            companions.extend(descriptor.fixture_path.iter().cloned());
            companions.extend(descriptor.auxiliary_paths.iter().cloned());
            for rel in companions {
                if !copied.insert(rel.clone()) {
                    continue; // shared fixture already copied
                }
                let path = self.root.join(&rel);
                if path.is_file() {
                    copy_under_basename(&path, &tests)?;
                } else {
                    warn!(file = %path.display(), "companion file missing, skipping");
                }
            }

            identifiers.push(identifier);
        }

        info!(
            category = %category.id,
            contracts = identifiers.len(),
            "scaffolding category"
        );

        write_deploy_script(destination, &identifiers, DeployTags::All)?;

        patch_manifest(
            destination,
            &ManifestPatch {
                name: format!("fhevm-category-{}", category.id),
                description: category.description.clone(),
                homepage: self.config.homepage_for(&category.id),
                extra_dependencies: category.extra_dependencies.clone(),
            },
        )?;

        // The per-contract task shipped with the template references the
        // placeholder contract, which no longer exists in a category project.
        if let Some(placeholder) = placeholder {
            let stale = destination.join(TASKS_DIR).join(format!("{placeholder}.ts"));
            if stale.is_file() {
                fs::remove_file(stale)?;
            }
        }

        Ok(identifiers)
    }

    /// The identifier of the template's placeholder contract, read from the
    /// first `.sol` file in the freshly cloned contract directory. `None`
    /// when the template ships no readable placeholder.
    fn template_placeholder(&self, destination: &Path) -> Option<String> {
        let contracts = destination.join(CONTRACTS_DIR);
        let entries = fs::read_dir(&contracts).ok()?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "sol") {
                if let Ok(text) = fs::read_to_string(&path) {
                    if let Ok(name) = extract_contract_name(&text, &path) {
                        return Some(name);
                    }
                }
            }
        }
        None
    }

    fn require_file(&self, relative: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if path.is_file() {
            Ok(path)
        } else {
            Err(Error::SourceNotFound(path))
        }
    }
}

/// Remove every file with the given extension directly under `dir`.
/// The template ships flat contract/test directories, so no recursion.
fn clear_files_with_extension(dir: &Path, extension: &str) -> Result<()> {
    if !dir.is_dir() {
        fs::create_dir_all(dir)?;
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}

fn copy_under_basename(source: &Path, dir: &Path) -> Result<()> {
    let name = source
        .file_name()
        .ok_or_else(|| Error::SourceNotFound(source.to_path_buf()))?;
    fs::create_dir_all(dir)?;
    fs::copy(source, dir.join(name))?;
    Ok(())
}

/// Best-effort rename of the template's per-contract task file.
///
/// Rewrites both case variants of the placeholder identifier across the file
/// and renames it to match the new contract. A blunt textual substitution,
/// isolated here so a tokenizing rewrite can replace it without touching the
/// scaffold flow.
fn rewrite_task_file(project: &Path, placeholder: &str, identifier: &str) -> Result<()> {
    let tasks = project.join(TASKS_DIR);
    let task_file = tasks.join(format!("{placeholder}.ts"));
    if !task_file.is_file() {
        return Ok(());
    }

    let content = fs::read_to_string(&task_file)?;
    let rewritten = content
        .replace(placeholder, identifier)
        .replace(&camel_case(placeholder), &camel_case(identifier));
    fs::write(tasks.join(format!("{identifier}.ts")), rewritten)?;
    if placeholder != identifier {
        fs::remove_file(&task_file)?;
    }
    debug!(from = %placeholder, to = %identifier, "rewrote task file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExampleDescriptor;
    use std::collections::BTreeMap;

    const PLACEHOLDER_SOL: &str = "// SPDX-License-Identifier: BSD-3-Clause-Clear\ncontract Template {\n}\n";
    const TEMPLATE_PKG: &str = r#"{
  "name": "hardhat-template",
  "description": "template",
  "version": "1.0.0",
  "dependencies": {
    "hardhat": "^2.22.0"
  }
}
"#;

    /// Lay out a minimal repository: template plus example sources.
    fn setup_repo(root: &Path) {
        let template = root.join("hardhat-template");
        fs::create_dir_all(template.join("contracts")).unwrap();
        fs::create_dir_all(template.join("test")).unwrap();
        fs::create_dir_all(template.join("tasks")).unwrap();
        fs::write(template.join("package.json"), TEMPLATE_PKG).unwrap();
        fs::write(template.join("contracts/Template.sol"), PLACEHOLDER_SOL).unwrap();
        fs::write(template.join("test/Template.ts"), "// placeholder test\n").unwrap();
        fs::write(
            template.join("tasks/Template.ts"),
            "task(\"task:template\", async () => {\n  const c = await ethers.getContract(\"Template\");\n  const x = template;\n});\n",
        )
        .unwrap();
        fs::write(template.join("hardhat.config.ts"), "export default {};\n").unwrap();

        fs::create_dir_all(root.join("contracts")).unwrap();
        fs::create_dir_all(root.join("test")).unwrap();
        fs::write(
            root.join("contracts/FHECounter.sol"),
            "contract FHECounter is SepoliaConfig {\n}\n",
        )
        .unwrap();
        fs::write(root.join("test/FHECounter.ts"), "// counter test\n").unwrap();
        fs::write(
            root.join("contracts/FHEAdd.sol"),
            "contract FHEAdd {\n}\n",
        )
        .unwrap();
        fs::write(root.join("test/FHEAdd.ts"), "// add test\n").unwrap();
        fs::write(root.join("test/Shared.ts"), "// shared fixture\n").unwrap();
    }

    fn counter_descriptor() -> ExampleDescriptor {
        ExampleDescriptor::new(
            "fhe-counter",
            "contracts/FHECounter.sol",
            "test/FHECounter.ts",
            "A simple encrypted counter",
        )
    }

    fn scaffolder(root: &Path) -> Scaffolder {
        Scaffolder::new(root, Config::default())
    }

    #[test]
    fn single_example_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");

        let ident = scaffolder(dir.path())
            .generate_example(&counter_descriptor(), &dest)
            .unwrap();
        assert_eq!(ident, "FHECounter");

        // Contract copied under its extracted name, placeholder gone.
        let copied = fs::read_to_string(dest.join("contracts/FHECounter.sol")).unwrap();
        assert_eq!(copied, "contract FHECounter is SepoliaConfig {\n}\n");
        let sols: Vec<_> = fs::read_dir(dest.join("contracts"))
            .unwrap()
            .flatten()
            .filter(|e| e.path().extension().is_some_and(|x| x == "sol"))
            .collect();
        assert_eq!(sols.len(), 1);

        // Test replaced under its own basename.
        assert!(dest.join("test/FHECounter.ts").exists());
        assert!(!dest.join("test/Template.ts").exists());

        // One deploy step, tagged with the identifier only.
        let script = fs::read_to_string(dest.join("deploy/deploy.ts")).unwrap();
        assert_eq!(script.matches("await deploy(").count(), 1);
        assert!(script.contains("func.tags = [\"FHECounter\"];"));

        // Manifest patched; unrelated fields intact.
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dest.join("package.json")).unwrap()).unwrap();
        assert_eq!(manifest["name"], "fhevm-example-fhe-counter");
        assert_eq!(manifest["version"], "1.0.0");
        assert_eq!(manifest["dependencies"]["hardhat"], "^2.22.0");
    }

    #[test]
    fn task_file_is_rewritten_and_renamed() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");

        scaffolder(dir.path())
            .generate_example(&counter_descriptor(), &dest)
            .unwrap();

        assert!(!dest.join("tasks/Template.ts").exists());
        let task = fs::read_to_string(dest.join("tasks/FHECounter.ts")).unwrap();
        assert!(task.contains("getContract(\"FHECounter\")"));
        // camelCase occurrences rewritten too
        assert!(task.contains("const x = fHECounter;"));
    }

    #[test]
    fn missing_source_fails_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");

        let descriptor = ExampleDescriptor::new(
            "ghost",
            "contracts/Ghost.sol",
            "test/FHECounter.ts",
            "missing",
        );
        let err = scaffolder(dir.path())
            .generate_example(&descriptor, &dest)
            .unwrap_err();
        assert_eq!(err.category(), "source-not-found");
        assert!(!dest.exists());
    }

    #[test]
    fn existing_destination_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");
        fs::create_dir_all(&dest).unwrap();

        let err = scaffolder(dir.path())
            .generate_example(&counter_descriptor(), &dest)
            .unwrap_err();
        assert_eq!(err.category(), "destination-exists");
    }

    fn category(examples: Vec<ExampleDescriptor>) -> CategoryDescriptor {
        CategoryDescriptor {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            description: "Basic examples".to_string(),
            examples,
            extra_dependencies: BTreeMap::new(),
        }
    }

    #[test]
    fn category_copies_every_contract_and_tags_all() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");

        let idents = scaffolder(dir.path())
            .generate_category(
                &category(vec![
                    counter_descriptor(),
                    ExampleDescriptor::new("fhe-add", "contracts/FHEAdd.sol", "test/FHEAdd.ts", "d"),
                ]),
                &dest,
            )
            .unwrap();
        assert_eq!(idents, vec!["FHECounter", "FHEAdd"]);

        assert!(dest.join("contracts/FHECounter.sol").exists());
        assert!(dest.join("contracts/FHEAdd.sol").exists());
        let script = fs::read_to_string(dest.join("deploy/deploy.ts")).unwrap();
        assert!(script.contains("func.tags = [\"all\", \"FHECounter\", \"FHEAdd\"];"));

        // Stale placeholder task removed.
        assert!(!dest.join("tasks/Template.ts").exists());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dest.join("package.json")).unwrap()).unwrap();
        assert_eq!(manifest["name"], "fhevm-category-basic");
    }

    #[test]
    fn category_skips_missing_sources_with_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");

        let idents = scaffolder(dir.path())
            .generate_category(
                &category(vec![
                    ExampleDescriptor::new("ghost", "contracts/Ghost.sol", "test/Ghost.ts", "d"),
                    counter_descriptor(),
                ]),
                &dest,
            )
            .unwrap();
        assert_eq!(idents, vec!["FHECounter"]);

        let script = fs::read_to_string(dest.join("deploy/deploy.ts")).unwrap();
        assert!(!script.contains("Ghost"));
        assert!(script.contains("func.tags = [\"all\", \"FHECounter\"];"));
    }

    #[test]
    fn shared_fixture_is_copied_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");

        let a = ExampleDescriptor::new(
            "fhe-counter",
            "contracts/FHECounter.sol",
            "test/FHECounter.ts",
            "d",
        )
        .with_fixture("test/Shared.ts");
        let b = ExampleDescriptor::new("fhe-add", "contracts/FHEAdd.sol", "test/FHEAdd.ts", "d")
            .with_fixture("test/Shared.ts");

        scaffolder(dir.path())
            .generate_category(&category(vec![a, b]), &dest)
            .unwrap();

        let shared: Vec<_> = fs::read_dir(dest.join("test"))
            .unwrap()
            .flatten()
            .filter(|e| e.file_name() == "Shared.ts")
            .collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(
            fs::read_to_string(dest.join("test/Shared.ts")).unwrap(),
            "// shared fixture\n"
        );
    }

    #[test]
    fn category_merges_extra_dependencies() {
        let dir = tempfile::tempdir().unwrap();
        setup_repo(dir.path());
        let dest = dir.path().join("out");

        let mut cat = category(vec![counter_descriptor()]);
        cat.extra_dependencies
            .insert("@openzeppelin/contracts".to_string(), "^5.0.2".to_string());

        scaffolder(dir.path()).generate_category(&cat, &dest).unwrap();

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dest.join("package.json")).unwrap()).unwrap();
        assert_eq!(manifest["dependencies"]["@openzeppelin/contracts"], "^5.0.2");
        assert_eq!(manifest["dependencies"]["hardhat"], "^2.22.0");
    }
}
