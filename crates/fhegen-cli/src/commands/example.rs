//! `fhegen example` implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use fhegen_core::{Config, Registry, Scaffolder};

/// Scaffold a standalone project for one example.
///
/// # Errors
///
/// Fails on unknown ids, missing source files, and pre-existing
/// destinations; all are reported before the destination is touched.
pub fn execute(
    root: &Path,
    config: &Config,
    registry: &Registry,
    id: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let descriptor = registry.find_example(id)?;
    let destination = output.unwrap_or_else(|| config.default_output(root, id));

    println!("Generating example {}...", id.cyan());
    let scaffolder = Scaffolder::new(root, config.clone());
    let contract = scaffolder.generate_example(descriptor, &destination)?;

    println!(
        "{} {} ({}) → {}",
        "Generated".green(),
        id,
        contract,
        destination.display()
    );
    Ok(())
}
