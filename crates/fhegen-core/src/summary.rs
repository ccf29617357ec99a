//! The persistent, category-grouped documentation index.
//!
//! The index lives on disk as markdown (`##` category headers, each followed
//! directly by its `- [title](file)` link lines, blocks separated by a blank
//! line) but is always manipulated as the structured [`IndexDocument`]; the
//! markdown dialect exists only at the storage boundary. The merge algorithm
//! is keyed on link target filenames, which are unique document-wide.
//!
//! Invariants the merge maintains:
//! - merging an already-present entry is a no-op (idempotent),
//! - block order is first-insertion order, never alphabetical,
//! - within a block, links keep insertion order, and new links always land
//!   after every previously-existing link.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::Result;
use crate::docs::DocEntry;

#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
static LINK_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \[(?P<text>[^\]]*)\]\((?P<target>[^)]*)\)\s*$").unwrap()
});

/// A single index link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Display text, normally the page title.
    pub text: String,
    /// Link target, unique across the whole document.
    pub target_file: String,
}

/// One category block: a `##` header and its link run.
#[derive(Debug, Clone, Default)]
pub struct CategoryBlock {
    /// Header text without the `## ` prefix.
    pub header: String,
    /// Links in insertion order.
    pub links: Vec<Link>,
    /// Non-link lines that followed the link run, preserved verbatim.
    pub trailing: Vec<String>,
}

/// The in-memory index document.
#[derive(Debug, Clone, Default)]
pub struct IndexDocument {
    /// Lines preceding the first category header, preserved verbatim
    /// (e.g. a GitBook `# Table of contents` title).
    pub preamble: Vec<String>,
    /// Category blocks in first-insertion order.
    pub blocks: Vec<CategoryBlock>,
}

impl IndexDocument {
    /// A fresh document holding a single empty default category block.
    #[must_use]
    pub fn new(default_category: &str) -> Self {
        Self {
            preamble: Vec::new(),
            blocks: vec![CategoryBlock {
                header: default_category.to_string(),
                ..CategoryBlock::default()
            }],
        }
    }

    /// Parse the markdown form into the structured model.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::default();
        let mut current: Option<CategoryBlock> = None;
        // Whether we are still inside the contiguous link run of the current
        // block; the first blank or non-link line ends it.
        let mut in_link_run = false;

        for line in text.lines() {
            if let Some(header) = line.strip_prefix("## ") {
                if let Some(block) = current.take() {
                    doc.blocks.push(block);
                }
                current = Some(CategoryBlock {
                    header: header.trim().to_string(),
                    ..CategoryBlock::default()
                });
                in_link_run = true;
                continue;
            }

            match current.as_mut() {
                None => {
                    doc.preamble.push(line.to_string());
                },
                Some(block) => {
                    if in_link_run {
                        if let Some(caps) = LINK_LINE.captures(line) {
                            block.links.push(Link {
                                text: caps["text"].to_string(),
                                target_file: caps["target"].to_string(),
                            });
                            continue;
                        }
                        in_link_run = false;
                    }
                    if !line.trim().is_empty() {
                        block.trailing.push(line.to_string());
                    }
                },
            }
        }
        if let Some(block) = current.take() {
            doc.blocks.push(block);
        }
        // Drop trailing blank preamble lines left by blank-line separation.
        while doc.preamble.last().is_some_and(|l| l.trim().is_empty()) {
            doc.preamble.pop();
        }
        doc
    }

    /// Load the index from disk, or create a fresh one with an empty default
    /// block when the file does not exist.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors other than the file being absent.
    pub fn load(path: &Path, default_category: &str) -> Result<Self> {
        if !path.exists() {
            debug!(index = %path.display(), "index missing, starting fresh");
            return Ok(Self::new(default_category));
        }
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// Whether any block already links to `target_file`.
    #[must_use]
    pub fn contains_target(&self, target_file: &str) -> bool {
        self.blocks
            .iter()
            .any(|b| b.links.iter().any(|l| l.target_file == target_file))
    }

    /// Merge one entry's link into the document.
    ///
    /// Returns `true` when a link was inserted, `false` for the idempotent
    /// no-op (the target file is already linked somewhere in the document).
    pub fn merge(&mut self, entry: &DocEntry) -> bool {
        let target = entry.target_file();
        if self.contains_target(&target) {
            return false;
        }

        let link = Link {
            text: entry.title.clone(),
            target_file: target,
        };

        if let Some(block) = self.blocks.iter_mut().find(|b| b.header == entry.category) {
            // Existing category: append after every previously-existing link.
            block.links.push(link);
        } else {
            self.blocks.push(CategoryBlock {
                header: entry.category.clone(),
                links: vec![link],
                trailing: Vec::new(),
            });
        }
        true
    }

    /// Serialize to the markdown storage form.
    ///
    /// Blocks with no links are skipped, so the default block of a fresh
    /// document only appears once something is filed under it.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut sections: Vec<String> = Vec::new();
        if !self.preamble.is_empty() {
            sections.push(self.preamble.join("\n"));
        }
        for block in &self.blocks {
            if block.links.is_empty() && block.trailing.is_empty() {
                continue;
            }
            let mut section = format!("## {}", block.header);
            for link in &block.links {
                section.push_str(&format!("\n- [{}]({})", link.text, link.target_file));
            }
            if !block.trailing.is_empty() {
                section.push('\n');
                section.push('\n');
                section.push_str(&block.trailing.join("\n"));
            }
            sections.push(section);
        }
        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }

    /// Rewrite the whole document to disk from the in-memory model.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from creating parent directories or writing.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(index = %path.display(), blocks = self.blocks.len(), "rewriting index");
        fs::write(path, self.serialize())?;
        Ok(())
    }
}
