//! fhegen - generate standalone FHEVM example projects and docs.
//!
//! Entry point for the `fhegen` command-line interface. Command
//! implementations live in the `commands` module; engine logic is in
//! `fhegen-core`.

use anyhow::{Context as _, Result};
use clap::Parser;
use fhegen_core::{Config, Registry};

mod cli;
mod commands;
mod utils;

use cli::{Cli, Commands};
use utils::logging::initialize_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(&root)?,
    };

    let registry = match &config.registry_file {
        Some(file) => Registry::from_file(&root.join(file))?,
        None => Registry::builtin(),
    };

    match cli.command {
        Commands::Example { ref id, ref output } => {
            commands::generate_example(&root, &config, &registry, id, output.clone())
        },
        Commands::Category { ref id, ref output } => {
            commands::generate_category(&root, &config, &registry, id, output.clone())
        },
        Commands::Docs { ref id, skip_index } => {
            commands::generate_docs(&root, &config, &registry, id.as_deref(), skip_index)
        },
    }
}
