//! Error types for the prep content catalog.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or validating the content catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the manifest file.
    #[error("failed to read manifest {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse the TOML manifest.
    #[error("failed to parse manifest {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Two entries in the same listing share a topic slug.
    ///
    /// Topics route to entries, so a duplicate would make one of the two
    /// entries unreachable.
    #[error("duplicate topic '{topic}' in {listing} listing")]
    DuplicateTopic {
        /// The duplicated topic slug.
        topic: String,
        /// Human-readable listing description, e.g. `languages/java`.
        listing: String,
    },
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category '{0}' (expected languages, dsa, system-design, or interview)")]
pub struct ParseCategoryError(pub String);
