//! `fhegen docs` implementation.
//!
//! Renders one page (by example id) or every page in the registry, then
//! merges the rendered pages' links into the index document. The all-pages
//! run is failure-tolerant: each item's failure is counted and reported in
//! the summary, and the index merge pass still runs over the pages that
//! rendered, in the same registry order.

use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use fhegen_core::{
    Config, DocEntry, Error, ExampleDescriptor, IndexDocument, Registry,
    naming::extract_contract_name, write_page,
};

/// Render documentation pages and update the index.
///
/// # Errors
///
/// Single-page mode fails on unknown ids and missing files. All-pages mode
/// counts per-item failures and only fails when the index cannot be
/// persisted.
pub fn execute(
    root: &Path,
    config: &Config,
    registry: &Registry,
    id: Option<&str>,
    skip_index: bool,
) -> Result<()> {
    let entries = match id {
        Some(id) => {
            let descriptor = registry.find_example(id)?;
            let category = registry.category_of(id);
            vec![build_entry(root, config, descriptor, category)?]
        },
        None => render_all(root, config, registry)?,
    };

    for entry in &entries {
        println!(
            "{} {} → {}",
            "Rendered".green(),
            entry.title,
            entry.output_path.display()
        );
    }

    if skip_index {
        return Ok(());
    }

    let index_path = config.index_file(root);
    let mut index = IndexDocument::load(&index_path, &config.default_category)?;
    let mut inserted = 0usize;
    for entry in &entries {
        if index.merge(entry) {
            inserted += 1;
        }
    }
    index.save(&index_path)?;
    println!(
        "{} index: {} new link(s) in {}",
        "Updated".green(),
        inserted,
        index_path.display()
    );
    Ok(())
}

/// Render every registry page, counting per-item failures instead of
/// aborting, and return the entries that rendered.
fn render_all(root: &Path, config: &Config, registry: &Registry) -> Result<Vec<DocEntry>> {
    let mut rendered = Vec::new();
    let mut failures = 0usize;

    for (descriptor, category) in registry.doc_examples() {
        match build_entry(root, config, descriptor, category) {
            Ok(entry) => rendered.push(entry),
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {e}", "Failed".red(), descriptor.id);
            },
        }
    }

    println!("Generated {} page(s), {failures} failure(s)", rendered.len());
    Ok(rendered)
}

/// Build and write one example's page.
///
/// The page title is the contract's self-declared identifier, falling back
/// to the source file's stem when the source declares no contract.
fn build_entry(
    root: &Path,
    config: &Config,
    descriptor: &ExampleDescriptor,
    category: Option<&str>,
) -> Result<DocEntry, Error> {
    let source_path = root.join(&descriptor.source_path);
    let test_path = root.join(&descriptor.test_path);
    if !source_path.is_file() {
        return Err(Error::SourceNotFound(source_path));
    }
    if !test_path.is_file() {
        return Err(Error::SourceNotFound(test_path));
    }

    let source_text = fs::read_to_string(&source_path)?;
    let title = extract_contract_name(&source_text, &source_path).unwrap_or_else(|_| {
        source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let entry = DocEntry {
        title,
        description: descriptor.description.clone(),
        source_path,
        test_path,
        output_path: config.docs_dir(root).join(format!("{}.md", descriptor.id)),
        category: category.unwrap_or(&config.default_category).to_string(),
    };
    write_page(&entry)?;
    Ok(entry)
}
