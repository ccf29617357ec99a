//! `fhegen category` implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use fhegen_core::{Config, Registry, Scaffolder};

/// Scaffold one combined project for a whole category.
///
/// Member examples whose source is missing are skipped with a warning; the
/// command only fails outright on an unknown id or a pre-existing
/// destination.
///
/// # Errors
///
/// Fails on unknown ids and pre-existing destinations.
pub fn execute(
    root: &Path,
    config: &Config,
    registry: &Registry,
    id: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let category = registry.category(id)?;
    let destination = output.unwrap_or_else(|| config.default_output(root, id));

    println!(
        "Generating category {} ({} examples)...",
        id.cyan(),
        category.examples.len()
    );
    let scaffolder = Scaffolder::new(root, config.clone());
    let contracts = scaffolder.generate_category(category, &destination)?;

    let skipped = category.examples.len() - contracts.len();
    if skipped > 0 {
        println!("{} {skipped} example(s) skipped (missing source)", "Warning:".yellow());
    }
    println!(
        "{} {} with {} contract(s) → {}",
        "Generated".green(),
        id,
        contracts.len(),
        destination.display()
    );
    Ok(())
}
