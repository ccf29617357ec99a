//! Command implementations for the fhegen CLI.
//!
//! Each subcommand lives in its own submodule; all of them receive the
//! repository root, the loaded configuration, and the registry explicitly
//! so tests can drive them against synthetic layouts.

mod category;
mod docs;
mod example;

pub use category::execute as generate_category;
pub use docs::execute as generate_docs;
pub use example::execute as generate_example;
