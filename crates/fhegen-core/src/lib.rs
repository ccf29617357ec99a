//! # fhegen-core
//!
//! Engine for turning a registry of FHEVM examples (a Solidity contract, its
//! TypeScript test, and optional fixtures) into two derived outputs:
//!
//! - standalone, ready-to-build Hardhat projects cloned from a shared
//!   template, and
//! - a GitBook documentation set with an auto-maintained, category-grouped
//!   index.
//!
//! ## Architecture
//!
//! Two independent pipelines share the [`Registry`] and the name extractor:
//!
//! - **Scaffolding**: [`Scaffolder`] clones the template
//!   ([`clone_template`]), derives the canonical contract identifier from
//!   the source text ([`naming::extract_contract_name`]), resets and
//!   repopulates the contract/test directories, synthesizes the deploy
//!   script ([`deploy`]), and patches the manifest ([`patch_manifest`]).
//! - **Documentation**: [`docs`] renders one page per entry and
//!   [`IndexDocument`] idempotently merges its link into the persistent
//!   index.
//!
//! Execution is single-threaded and fully sequential; the only state shared
//! across invocations is the on-disk index and the target filesystem tree.
//! Concurrent invocations against the same destination or index must be
//! serialized by the caller.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use fhegen_core::{Config, Registry, Scaffolder};
//!
//! # fn main() -> fhegen_core::Result<()> {
//! let root = Path::new(".");
//! let config = Config::load(root)?;
//! let registry = Registry::builtin();
//!
//! let descriptor = registry.example("fhe-counter")?;
//! let scaffolder = Scaffolder::new(root, config.clone());
//! let contract = scaffolder
//!     .generate_example(descriptor, &config.default_output(root, &descriptor.id))?;
//! println!("generated {contract}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod deploy;
pub mod docs;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod registry;
pub mod scaffold;
pub mod summary;
pub mod template;

pub use config::{CONFIG_FILE, Config};
pub use deploy::{DeployTags, render_deploy_script, write_deploy_script};
pub use docs::{DocEntry, render_page, write_page};
pub use error::{Error, Result};
pub use manifest::{ManifestPatch, patch_manifest};
pub use registry::{CategoryDescriptor, ExampleDescriptor, Registry};
pub use scaffold::Scaffolder;
pub use summary::{CategoryBlock, IndexDocument, Link};
pub use template::{EXCLUDED_DIRS, clone_template};
