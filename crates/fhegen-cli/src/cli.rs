//! CLI structure and argument parsing for `fhegen`.
//!
//! Three independent entry points, mirroring the two derived outputs:
//!
//! ```bash
//! # Scaffold one standalone example project
//! fhegen example fhe-counter ./my-counter
//!
//! # Scaffold a whole category into one combined project
//! fhegen category basic
//!
//! # Render one or all documentation pages and update the index
//! fhegen docs
//! fhegen docs fhe-counter --skip-index
//! ```
//!
//! All paths are resolved against `--root` (default: the current directory),
//! where the Hardhat template, the example sources, and the docs tree live.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate standalone FHEVM example projects and documentation.
#[derive(Debug, Parser)]
#[command(name = "fhegen", version, about, long_about = None)]
pub struct Cli {
    /// Repository root holding the template, sources, and docs tree
    #[arg(long, global = true, env = "FHEGEN_ROOT")]
    pub root: Option<PathBuf>,

    /// Explicit config file (default: <root>/fhegen.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a standalone project for a single example
    Example {
        /// Example id (see the registry for valid keys)
        id: String,
        /// Destination directory; must not exist yet
        /// [default: <root>/generated/<id>]
        output: Option<PathBuf>,
    },
    /// Generate a combined project for a whole category
    Category {
        /// Category id (see the registry for valid keys)
        id: String,
        /// Destination directory; must not exist yet
        /// [default: <root>/generated/<id>]
        output: Option<PathBuf>,
    },
    /// Render documentation pages and update the index
    Docs {
        /// Example id; omit to render every page in the registry
        id: Option<String>,
        /// Render pages without touching the index document
        #[arg(long)]
        skip_index: bool,
    },
}
