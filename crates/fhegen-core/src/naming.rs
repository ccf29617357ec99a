//! Contract name extraction and identifier case helpers.
//!
//! The canonical identifier for a generated file is always derived from the
//! source artifact's own text, never from registry metadata, so generated
//! filenames match the contract's self-declared identity even when the two
//! drift apart.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

/// Matches a contract declaration at the start of a line: the `contract`
/// keyword, the bound identifier, then either `is` (inheritance) or the
/// opening brace. Leading whitespace is ignored.
#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
static CONTRACT_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*contract\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:is\s|\{)").unwrap()
});

/// Extract the first declared contract name from Solidity source text.
///
/// Returns the identifier bound by the first matching declaration line.
/// `origin` is only used to report which artifact failed.
///
/// # Errors
///
/// Returns [`Error::NameExtraction`] when no declaration line matches.
pub fn extract_contract_name(source: &str, origin: &Path) -> Result<String> {
    CONTRACT_DECL
        .captures(source)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| Error::NameExtraction(origin.to_path_buf()))
}

/// Lowercase the leading character of an identifier.
///
/// The Hardhat template keys its per-contract task ids with a
/// first-char-lowered form of the contract name, so the task rewrite has to
/// produce the same shape (`FHECounter` → `fHECounter`).
#[must_use]
pub fn camel_case(ident: &str) -> String {
    let mut chars = ident.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut out = String::with_capacity(ident.len());
        out.extend(first.to_lowercase());
        out.push_str(chars.as_str());
        out
    })
}

/// Scrape a description from the leading documentation comment of a Solidity
/// source, for use when the registry supplies none.
///
/// NatSpec `@notice` text wins when present; otherwise the first plain text
/// of the leading `///` or `/** ... */` comment block directly above the
/// contract declaration is used. Returns `None` when the source carries no
/// usable leading comment.
#[must_use]
pub fn leading_doc_comment(source: &str) -> Option<String> {
    let mut plain: Vec<String> = Vec::new();
    let mut notice: Option<String> = None;

    for raw in source.lines() {
        let line = raw.trim();
        if CONTRACT_DECL.is_match(raw) {
            break;
        }

        let text = if let Some(rest) = line.strip_prefix("///") {
            rest.trim()
        } else if let Some(rest) = line.strip_prefix("/**") {
            rest.trim_end_matches("*/").trim()
        } else if let Some(rest) = line.strip_prefix('*') {
            rest.trim_end_matches("*/").trim()
        } else {
            // Pragmas, imports, and blank lines between the comment block and
            // the declaration are skipped, but they also reset nothing.
            continue;
        };

        if let Some(rest) = text.strip_prefix("@notice") {
            notice = Some(rest.trim().to_string());
        } else if !text.is_empty() && !text.starts_with('@') {
            plain.push(text.to_string());
        }
    }

    notice.or_else(|| {
        if plain.is_empty() {
            None
        } else {
            Some(plain.join(" "))
        }
    })
}
