//! Error types for fhegen-core operations.
//!
//! All public functions in fhegen-core return [`Result<T>`] with a structured
//! [`Error`]. Errors are detected before destructive filesystem action
//! wherever the contract allows it: scaffolding validates its source files
//! and the destination path before the first write.

use thiserror::Error;

/// The main error type for fhegen-core operations.
///
/// `Display` gives the user-facing message; the underlying I/O error chain is
/// preserved through `source()` where one exists.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers filesystem reads/writes during cloning, scaffolding, and index
    /// persistence. The underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An unknown example or category key was requested.
    ///
    /// The message lists the valid keys so the caller can correct the
    /// invocation without consulting the registry source.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source or test file named by a descriptor does not exist.
    ///
    /// For single-example scaffolding this is fatal and raised before any
    /// filesystem mutation. Category scaffolding downgrades it to a logged
    /// per-item skip.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(std::path::PathBuf),

    /// The scaffolding destination already exists.
    ///
    /// Generated projects own their directory exclusively; there is no merge
    /// into pre-existing trees. Raised before any copy begins, so the
    /// existing contents are left untouched.
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(std::path::PathBuf),

    /// No contract declaration was found in a source artifact.
    ///
    /// The canonical identifier is derived from the artifact's own text; a
    /// source with no contract declaration line cannot be scaffolded or
    /// documented.
    #[error("No contract declaration found in {}", .0.display())]
    NameExtraction(std::path::PathBuf),

    /// The template's package manifest is not valid structured data.
    #[error("Manifest parse error: {0}")]
    ManifestParse(String),

    /// Serialization or deserialization failed.
    ///
    /// Raised for malformed registry or configuration TOML.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns the error category as a static string.
    ///
    /// Useful for logging and metrics without matching on the full variant.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::SourceNotFound(_) => "source-not-found",
            Self::DestinationExists(_) => "destination-exists",
            Self::NameExtraction(_) => "name-extraction",
            Self::ManifestParse(_) => "manifest-parse",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenient result type for fhegen-core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
