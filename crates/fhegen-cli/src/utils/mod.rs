//! Shared CLI utilities.

pub mod logging;
