//! Documentation page rendering.
//!
//! Each example gets one GitBook-flavoured markdown page: a description
//! paragraph, a fixed placement hint, and a two-pane tab block embedding the
//! contract and its test verbatim. No escaping or reformatting is applied to
//! the embedded file contents.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::Result;
use crate::naming::{extract_contract_name, leading_doc_comment};

/// One documentation page to render and link from the index.
#[derive(Debug, Clone)]
pub struct DocEntry {
    /// Page title, normally the contract identifier.
    pub title: String,
    /// Description paragraph; when empty, the renderer falls back to the
    /// source's leading documentation comment.
    pub description: String,
    /// Path of the Solidity source embedded in the first pane.
    pub source_path: PathBuf,
    /// Path of the test embedded in the second pane.
    pub test_path: PathBuf,
    /// Where the rendered page is written. The basename is the unique key
    /// used by the index merger.
    pub output_path: PathBuf,
    /// Index category header this page is linked under.
    pub category: String,
}

impl DocEntry {
    /// Basename of the output page, the document-wide index key.
    #[must_use]
    pub fn target_file(&self) -> String {
        self.output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Render the page for an entry from the verbatim source and test text.
#[must_use]
pub fn render_page(entry: &DocEntry, source_text: &str, test_text: &str) -> String {
    // Tab title prefers the contract's self-declared name; a source with no
    // declaration falls back to the file's own stem.
    let identifier = extract_contract_name(source_text, &entry.source_path)
        .ok()
        .unwrap_or_else(|| {
            entry
                .source_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
    let test_name = entry
        .test_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let description = if entry.description.is_empty() {
        leading_doc_comment(source_text).unwrap_or_default()
    } else {
        entry.description.clone()
    };

    let mut page = String::new();
    page.push_str(&format!("# {}\n\n", entry.title));
    if !description.is_empty() {
        page.push_str(&format!("{description}\n\n"));
    }
    page.push_str(
        "{% hint style=\"info\" %}\nTo run this example correctly, make sure the files are placed in the following directories:\n\n\
         - `.sol` file → `<your-project-root-dir>/contracts/`\n\
         - `.ts` file → `<your-project-root-dir>/test/`\n\
         {% endhint %}\n\n",
    );
    page.push_str("{% tabs %}\n\n");
    page.push_str(&format!("{{% tab title=\"{identifier}.sol\" %}}\n\n"));
    page.push_str(&format!("```solidity\n{source_text}```\n\n"));
    page.push_str("{% endtab %}\n\n");
    page.push_str(&format!("{{% tab title=\"{test_name}\" %}}\n\n"));
    page.push_str(&format!("```ts\n{test_text}```\n\n"));
    page.push_str("{% endtab %}\n\n");
    page.push_str("{% endtabs %}\n");
    page
}

/// Render an entry's page and write it to its output path, creating parent
/// directories as needed.
///
/// # Errors
///
/// Propagates I/O errors from reading the referenced files or writing the
/// page.
pub fn write_page(entry: &DocEntry) -> Result<()> {
    let source_text = fs::read_to_string(&entry.source_path)?;
    let test_text = fs::read_to_string(&entry.test_path)?;
    if let Some(parent) = entry.output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!(page = %entry.output_path.display(), "writing doc page");
    fs::write(&entry.output_path, render_page(entry, &source_text, &test_text))?;
    Ok(())
}
