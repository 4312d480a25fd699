//! Content loading.
//!
//! A [`Loader`] resolves an entry's locator to raw markdown text. The
//! catalog and outline crates never see the loader; they work on locators
//! and text respectively. "Content not found" (the locator resolves to
//! nothing) and "failed to load" (the resource exists but cannot be read)
//! are distinct conditions with distinct user-facing messages.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors that can occur when loading content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The locator does not resolve to any content.
    #[error("failed to load {locator}: no such file")]
    NotFound {
        /// The locator that did not resolve.
        locator: String,
    },

    /// The content exists but could not be read.
    #[error("failed to load {locator}: {source}")]
    Io {
        /// The locator being loaded.
        locator: String,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Resolves locators to raw markdown text.
pub trait Loader {
    /// Loads the content stored at a locator.
    fn load(&self, locator: &str) -> Result<String, LoadError>;
}

/// Loader that resolves locators as paths relative to the content root
/// (the directory containing the manifest).
#[derive(Debug, Clone)]
pub struct FsLoader {
    /// The content root.
    root: PathBuf,
}

impl FsLoader {
    /// Creates a loader rooted at the given directory.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl Loader for FsLoader {
    fn load(&self, locator: &str) -> Result<String, LoadError> {
        let path = self.root.join(locator);
        if !path.is_file() {
            return Err(LoadError::NotFound {
                locator: locator.to_string(),
            });
        }
        fs::read_to_string(&path).map_err(|source| LoadError::Io {
            locator: locator.to_string(),
            source,
        })
    }
}
