//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use prep_catalog::{Catalog, discover_manifest};

use crate::loader::FsLoader;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Path to the discovered manifest, if any.
    pub manifest_path: Option<PathBuf>,
    /// Loaded catalog (empty if no manifest was found).
    pub catalog: Catalog,
}

impl CommandContext {
    /// Discovers the manifest and loads the catalog.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let manifest_path = discover_manifest(&cwd);

        let catalog = match &manifest_path {
            Some(path) => Catalog::load(path).map_err(|e| {
                eprintln!("error: failed to load catalog: {e}");
                ExitCode::FAILURE
            })?,
            None => Catalog::default(),
        };

        Ok(Self {
            cwd,
            manifest_path,
            catalog,
        })
    }

    /// Loads only the current directory, skipping manifest parsing.
    ///
    /// Used for commands like `init` and `check` that must work even when
    /// an existing manifest is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            manifest_path: None,
            catalog: Catalog::default(),
        })
    }

    /// Ensures a manifest was found, printing an init hint otherwise.
    pub fn require_manifest(&self) -> Result<(), ExitCode> {
        if self.manifest_path.is_none() {
            eprintln!("error: no prep.toml manifest found");
            eprintln!("Run 'prep init' to create one, then add content entries.");
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// The content root: the directory containing the manifest.
    pub fn content_root(&self) -> Option<&Path> {
        self.manifest_path.as_deref().and_then(Path::parent)
    }

    /// Returns a loader rooted at the content root.
    pub fn loader(&self) -> Result<FsLoader, ExitCode> {
        match self.content_root() {
            Some(root) => Ok(FsLoader::new(root)),
            None => {
                eprintln!("error: no prep.toml manifest found");
                eprintln!("Run 'prep init' to create one, then add content entries.");
                Err(ExitCode::FAILURE)
            }
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
