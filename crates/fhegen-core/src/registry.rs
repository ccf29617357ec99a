//! Example and category registry.
//!
//! The registry is read-only configuration: descriptors are loaded once per
//! process and never mutated. It is always constructed explicitly and passed
//! to the components that need it, so tests can drive the engine with
//! synthetic registries instead of the builtin data set.
//!
//! Descriptor paths are relative to the repository root (see
//! [`crate::Config`]).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Descriptor for a single example: one contract, its test, and optional
/// fixture and auxiliary files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleDescriptor {
    /// Unique registry key, kebab-case.
    pub id: String,
    /// Path to the Solidity source, relative to the repository root.
    pub source_path: String,
    /// Path to the TypeScript test, relative to the repository root.
    pub test_path: String,
    /// Optional test fixture copied alongside the test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<String>,
    /// Additional files copied into the generated test directory, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auxiliary_paths: Vec<String>,
    /// Human-readable description, used for the manifest and docs page.
    pub description: String,
}

impl ExampleDescriptor {
    /// Create a descriptor with no fixture or auxiliary files.
    #[must_use]
    pub fn new(id: &str, source_path: &str, test_path: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            source_path: source_path.to_string(),
            test_path: test_path.to_string(),
            fixture_path: None,
            auxiliary_paths: Vec::new(),
            description: description.to_string(),
        }
    }

    /// Attach a fixture path.
    #[must_use]
    pub fn with_fixture(mut self, fixture_path: &str) -> Self {
        self.fixture_path = Some(fixture_path.to_string());
        self
    }

    /// Attach auxiliary file paths.
    #[must_use]
    pub fn with_auxiliary(mut self, paths: &[&str]) -> Self {
        self.auxiliary_paths = paths.iter().map(|p| (*p).to_string()).collect();
        self
    }
}

/// Descriptor for a category: an ordered group of examples scaffolded into
/// one combined project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    /// Unique registry key, kebab-case.
    pub id: String,
    /// Display name, used as the docs index header.
    pub name: String,
    /// Human-readable description for the generated manifest.
    pub description: String,
    /// Member examples, in scaffold order.
    pub examples: Vec<ExampleDescriptor>,
    /// Extra npm dependencies merged into the template manifest,
    /// package name to version constraint.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_dependencies: BTreeMap<String, String>,
}

/// Registry of all known examples and categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    /// Standalone examples, in docs order.
    #[serde(default)]
    pub examples: Vec<ExampleDescriptor>,
    /// Categories, in docs order.
    #[serde(default)]
    pub categories: Vec<CategoryDescriptor>,
}

impl Registry {
    /// The builtin registry shipped with the tool.
    #[must_use]
    pub fn builtin() -> Self {
        let basics = vec![
            ExampleDescriptor::new(
                "fhe-counter",
                "contracts/basic/FHECounter.sol",
                "test/basic/FHECounter.ts",
                "A simple encrypted counter using FHE operations",
            ),
            ExampleDescriptor::new(
                "fhe-add",
                "contracts/basic/FHEAdd.sol",
                "test/basic/FHEAdd.ts",
                "Adding two encrypted numbers",
            ),
            ExampleDescriptor::new(
                "decrypt-single-value",
                "contracts/basic/DecryptSingleValue.sol",
                "test/basic/DecryptSingleValue.ts",
                "Requesting public decryption of a single encrypted value",
            ),
            ExampleDescriptor::new(
                "encrypt-single-value",
                "contracts/basic/EncryptSingleValue.sol",
                "test/basic/EncryptSingleValue.ts",
                "Accepting an encrypted input with its attestation proof",
            ),
        ];

        let advanced = vec![
            ExampleDescriptor::new(
                "blind-auction",
                "contracts/advanced/BlindAuction.sol",
                "test/advanced/BlindAuction.ts",
                "A sealed-bid auction where bids stay encrypted until the end",
            )
            .with_fixture("test/advanced/BlindAuctionFixture.ts"),
            ExampleDescriptor::new(
                "confidential-erc20",
                "contracts/advanced/ConfidentialERC20.sol",
                "test/advanced/ConfidentialERC20.ts",
                "An ERC20-style token with encrypted balances and transfers",
            )
            .with_fixture("test/advanced/ConfidentialERC20Fixture.ts")
            .with_auxiliary(&["test/advanced/instances.ts"]),
        ];

        let mut advanced_deps = BTreeMap::new();
        advanced_deps.insert(
            "@openzeppelin/contracts".to_string(),
            "^5.0.2".to_string(),
        );

        Self {
            examples: basics.clone(),
            categories: vec![
                CategoryDescriptor {
                    id: "basic".to_string(),
                    name: "Basic".to_string(),
                    description: "Minimal FHEVM operations: encrypt, compute, decrypt".to_string(),
                    examples: basics,
                    extra_dependencies: BTreeMap::new(),
                },
                CategoryDescriptor {
                    id: "advanced".to_string(),
                    name: "Advanced".to_string(),
                    description: "Larger confidential contracts built from the basic patterns"
                        .to_string(),
                    examples: advanced,
                    extra_dependencies: advanced_deps,
                },
            ],
        }
    }

    /// Load a registry from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when the file is not valid registry
    /// TOML, or an I/O error when it cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Serialization(format!("invalid registry file {}: {e}", path.display()))
        })
    }

    /// Look up a standalone example by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] listing the valid example keys when the id
    /// is unknown.
    pub fn example(&self, id: &str) -> Result<&ExampleDescriptor> {
        self.examples.iter().find(|e| e.id == id).ok_or_else(|| {
            Error::Config(format!(
                "unknown example '{id}'. Valid keys: {}",
                self.example_keys().join(", ")
            ))
        })
    }

    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] listing the valid category keys when the id
    /// is unknown.
    pub fn category(&self, id: &str) -> Result<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id).ok_or_else(|| {
            Error::Config(format!(
                "unknown category '{id}'. Valid keys: {}",
                self.category_keys().join(", ")
            ))
        })
    }

    /// Look up an example anywhere in the registry: standalone examples
    /// first, then category members.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] listing the valid keys when the id is
    /// unknown.
    pub fn find_example(&self, id: &str) -> Result<&ExampleDescriptor> {
        if let Some(example) = self.examples.iter().find(|e| e.id == id) {
            return Ok(example);
        }
        self.categories
            .iter()
            .flat_map(|c| c.examples.iter())
            .find(|e| e.id == id)
            .ok_or_else(|| {
                Error::Config(format!(
                    "unknown example '{id}'. Valid keys: {}",
                    self.doc_keys().join(", ")
                ))
            })
    }

    /// All documentable examples in registry order, paired with their
    /// category name: category members first (per category, in order), then
    /// standalone examples that belong to no category. Each id appears once.
    #[must_use]
    pub fn doc_examples(&self) -> Vec<(&ExampleDescriptor, Option<&str>)> {
        let mut seen: Vec<&str> = Vec::new();
        let mut out = Vec::new();
        for category in &self.categories {
            for example in &category.examples {
                if !seen.contains(&example.id.as_str()) {
                    seen.push(example.id.as_str());
                    out.push((example, Some(category.name.as_str())));
                }
            }
        }
        for example in &self.examples {
            if !seen.contains(&example.id.as_str()) {
                seen.push(example.id.as_str());
                out.push((example, None));
            }
        }
        out
    }

    /// Ids of every documentable example, in [`Self::doc_examples`] order.
    #[must_use]
    pub fn doc_keys(&self) -> Vec<&str> {
        self.doc_examples().iter().map(|(e, _)| e.id.as_str()).collect()
    }

    /// Ids of all standalone examples, in registry order.
    #[must_use]
    pub fn example_keys(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.id.as_str()).collect()
    }

    /// Ids of all categories, in registry order.
    #[must_use]
    pub fn category_keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// The category name for an example id, when the example belongs to one.
    ///
    /// Standalone examples that appear in no category fall back to the
    /// caller-supplied default when building doc entries.
    #[must_use]
    pub fn category_of(&self, example_id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.examples.iter().any(|e| e.id == example_id))
            .map(|c| c.name.as_str())
    }
}
