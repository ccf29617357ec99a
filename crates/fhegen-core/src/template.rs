//! Template directory cloning.
//!
//! A generated project starts life as a recursive copy of the shared Hardhat
//! template, minus build-artifact directories that must never leak into a
//! fresh project. The destination is required not to exist: the existence
//! check happens before the first write, so a refused clone leaves a
//! pre-existing destination byte-for-byte untouched.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Directory names never copied out of the template. Build caches, compiled
/// artifacts, and generated type bindings are all reproducible downstream.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "artifacts",
    "cache",
    "coverage",
    "types",
    "typechain-types",
    "deployments",
    ".git",
];

/// Recursively copy the template rooted at `template` into `destination`.
///
/// Intermediate directories are created as needed. Symbolic links are
/// re-created as links (not followed); regular files are copied verbatim,
/// which preserves their permission bits.
///
/// # Errors
///
/// Returns [`Error::DestinationExists`] when `destination` already exists,
/// before anything is written. Propagates I/O errors from the copy itself.
pub fn clone_template(template: &Path, destination: &Path) -> Result<()> {
    if destination.exists() {
        return Err(Error::DestinationExists(destination.to_path_buf()));
    }
    debug!(
        template = %template.display(),
        destination = %destination.display(),
        "cloning template"
    );
    copy_tree(template, destination)
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let name = entry.file_name();
        let source = entry.path();
        let target = to.join(&name);
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            let excluded = name
                .to_str()
                .is_some_and(|n| EXCLUDED_DIRS.contains(&n));
            if excluded {
                debug!(dir = %source.display(), "skipping excluded directory");
                continue;
            }
            copy_tree(&source, &target)?;
        } else if file_type.is_symlink() {
            copy_symlink(&source, &target)?;
        } else {
            // fs::copy preserves the permission bits of the source file.
            fs::copy(&source, &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(source)?;
    std::os::unix::fs::symlink(link, target)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    // Windows symlink creation needs elevated rights; fall back to copying
    // the link target's contents.
    fs::copy(source, target)?;
    Ok(())
}
